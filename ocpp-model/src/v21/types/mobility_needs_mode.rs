ocpp_enum! {
    /// Who decides the energy request of an ISO 15118-20 session.
    MobilityNeedsMode as "MobilityNeedsModeEnumType" {
        Evcc = "EVCC",
        EvccSecc = "EVCC_SECC",
    }
}
