ocpp_enum! {
    /// Unit a charging limit is expressed in.
    ChargingRateUnit as "ChargingRateUnitEnumType" {
        Watts = "W",
        Amperes = "A",
    }
}
