ocpp_enum! {
    EnergyTransferMode as "EnergyTransferModeEnumType" {
        AcSinglePhase = "AC_single_phase",
        AcTwoPhase = "AC_two_phase",
        AcThreePhase = "AC_three_phase",
        Dc = "DC",
        AcBpt = "AC_BPT",
        AcBptDer = "AC_BPT_DER",
        AcDer = "AC_DER",
        DcBpt = "DC_BPT",
        DcAcdp = "DC_ACDP",
        DcAcdpBpt = "DC_ACDP_BPT",
        Wpt = "WPT",
    }
}
