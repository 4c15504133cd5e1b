ocpp_enum! {
    CostDimension as "CostDimensionEnumType" {
        Energy = "Energy",
        MaxCurrent = "MaxCurrent",
        MinCurrent = "MinCurrent",
        MaxPower = "MaxPower",
        MinPower = "MinPower",
        /// The token carries the capital `T` as published.
        IdleTime = "IdleTIme",
        ChargingTime = "ChargingTime",
    }
}
