ocpp_enum! {
    TariffSetStatus as "TariffSetStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        TooManyElements = "TooManyElements",
        ConditionNotSupported = "ConditionNotSupported",
        DuplicateTariffId = "DuplicateTariffId",
    }
}
