ocpp_enum! {
    DerControl as "DERControlEnumType" {
        EnterService = "EnterService",
        FreqDroop = "FreqDroop",
        FreqWatt = "FreqWatt",
        FixedPfAbsorb = "FixedPFAbsorb",
        FixedPfInject = "FixedPFInject",
        FixedVar = "FixedVar",
        Gradients = "Gradients",
        HfMustTrip = "HFMustTrip",
        HfMayTrip = "HFMayTrip",
        HvMustTrip = "HVMustTrip",
        HvMomCess = "HVMomCess",
        HvMayTrip = "HVMayTrip",
        LimitMaxDischarge = "LimitMaxDischarge",
        LfMustTrip = "LFMustTrip",
        LvMustTrip = "LVMustTrip",
        LvMomCess = "LVMomCess",
        LvMayTrip = "LVMayTrip",
        PowerMonitoringMustTrip = "PowerMonitoringMustTrip",
        VoltVar = "VoltVar",
        VoltWatt = "VoltWatt",
        WattPf = "WattPF",
        WattVar = "WattVar",
    }
}
