ocpp_enum! {
    TariffKind as "TariffKindEnumType" {
        DefaultTariff = "DefaultTariff",
        DriverTariff = "DriverTariff",
    }
}
