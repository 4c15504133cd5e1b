ocpp_enum! {
    IslandingDetection as "IslandingDetectionEnumType" {
        NoAntiIslandingSupport = "NoAntiIslandingSupport",
        RoCoF = "RoCoF",
        UvpOvp = "UVP_OVP",
        UfpOfp = "UFP_OFP",
        VoltageVectorShift = "VoltageVectorShift",
        ZeroCrossingDetection = "ZeroCrossingDetection",
        OtherPassive = "OtherPassive",
        ImpedanceMeasurement = "ImpedanceMeasurement",
        ImpedanceAtFrequency = "ImpedanceAtFrequency",
        SlipModeFrequencyShift = "SlipModeFrequencyShift",
        SandiaFrequencyShift = "SandiaFrequencyShift",
        SandiaVoltageShift = "SandiaVoltageShift",
        FrequencyJump = "FrequencyJump",
        RclqFactor = "RCLQFactor",
        OtherActive = "OtherActive",
    }
}
