ocpp_enum! {
    PriorityChargingStatus as "PriorityChargingStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        NoProfile = "NoProfile",
    }
}
