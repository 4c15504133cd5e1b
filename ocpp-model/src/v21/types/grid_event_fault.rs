ocpp_enum! {
    GridEventFault as "GridEventFaultEnumType" {
        CurrentImbalance = "CurrentImbalance",
        LocalEmergency = "LocalEmergency",
        LowInputPower = "LowInputPower",
        OverCurrent = "OverCurrent",
        OverFrequency = "OverFrequency",
        OverVoltage = "OverVoltage",
        PhaseRotation = "PhaseRotation",
        RemoteEmergency = "RemoteEmergency",
        UnderFrequency = "UnderFrequency",
        UnderVoltage = "UnderVoltage",
        VoltageImbalance = "VoltageImbalance",
    }
}
