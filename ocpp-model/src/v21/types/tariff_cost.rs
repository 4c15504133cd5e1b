ocpp_enum! {
    TariffCost as "TariffCostEnumType" {
        NormalCost = "NormalCost",
        MinCost = "MinCost",
        MaxCost = "MaxCost",
    }
}
