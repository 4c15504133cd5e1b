ocpp_enum! {
    NotifyEvChargingNeedsStatus as "NotifyEVChargingNeedsStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        Processing = "Processing",
        NoChargingProfile = "NoChargingProfile",
    }
}
