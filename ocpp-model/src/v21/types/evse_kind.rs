ocpp_enum! {
    EvseKind as "EvseKindEnumType" {
        Ac = "AC",
        Dc = "DC",
    }
}
