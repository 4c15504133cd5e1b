ocpp_enum! {
    TariffChangeStatus as "TariffChangeStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        TooManyElements = "TooManyElements",
        ConditionNotSupported = "ConditionNotSupported",
        TxNotFound = "TxNotFound",
        NoCurrencyChange = "NoCurrencyChange",
    }
}
