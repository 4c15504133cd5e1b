ocpp_enum! {
    ClearChargingProfileStatus as "ClearChargingProfileStatusEnumType" {
        Accepted = "Accepted",
        Unknown = "Unknown",
    }
}
