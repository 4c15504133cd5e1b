ocpp_enum! {
    DerUnit as "DERUnitEnumType" {
        NotApplicable = "Not_Applicable",
        PctMaxW = "PctMaxW",
        PctMaxVar = "PctMaxVar",
        PctWAvail = "PctWAvail",
        PctVarAvail = "PctVarAvail",
        PctEffectiveV = "PctEffectiveV",
    }
}
