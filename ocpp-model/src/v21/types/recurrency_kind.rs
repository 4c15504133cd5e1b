ocpp_enum! {
    RecurrencyKind as "RecurrencyKindEnumType" {
        Daily = "Daily",
        Weekly = "Weekly",
    }
}
