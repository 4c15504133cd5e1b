ocpp_enum! {
    GetChargingProfileStatus as "GetChargingProfileStatusEnumType" {
        Accepted = "Accepted",
        NoProfiles = "NoProfiles",
    }
}
