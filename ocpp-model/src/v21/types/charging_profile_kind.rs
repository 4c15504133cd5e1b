ocpp_enum! {
    ChargingProfileKind as "ChargingProfileKindEnumType" {
        Absolute = "Absolute",
        Recurring = "Recurring",
        Relative = "Relative",
        Dynamic = "Dynamic",
    }
}
