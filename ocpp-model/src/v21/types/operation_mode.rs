ocpp_enum! {
    OperationMode as "OperationModeEnumType" {
        Idle = "Idle",
        ChargingOnly = "ChargingOnly",
        CentralSetpoint = "CentralSetpoint",
        ExternalSetpoint = "ExternalSetpoint",
        ExternalLimits = "ExternalLimits",
        CentralFrequency = "CentralFrequency",
        LocalFrequency = "LocalFrequency",
        LocalLoadBalancing = "LocalLoadBalancing",
    }
}
