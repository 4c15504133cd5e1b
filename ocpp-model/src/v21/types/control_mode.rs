ocpp_enum! {
    ControlMode as "ControlModeEnumType" {
        ScheduledControl = "ScheduledControl",
        DynamicControl = "DynamicControl",
    }
}
