ocpp_enum! {
    TariffGetStatus as "TariffGetStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        NoTariff = "NoTariff",
    }
}
