ocpp_enum! {
    ChargingProfilePurpose as "ChargingProfilePurposeEnumType" {
        ChargingStationExternalConstraints = "ChargingStationExternalConstraints",
        ChargingStationMaxProfile = "ChargingStationMaxProfile",
        TxDefaultProfile = "TxDefaultProfile",
        TxProfile = "TxProfile",
        PriorityCharging = "PriorityCharging",
        LocalGeneration = "LocalGeneration",
    }
}
