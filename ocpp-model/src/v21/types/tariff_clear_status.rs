ocpp_enum! {
    TariffClearStatus as "TariffClearStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        NoTariff = "NoTariff",
    }
}
