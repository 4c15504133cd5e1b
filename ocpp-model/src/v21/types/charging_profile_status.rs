ocpp_enum! {
    ChargingProfileStatus as "ChargingProfileStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
    }
}
