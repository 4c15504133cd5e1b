ocpp_enum! {
    PowerDuringCessation as "PowerDuringCessationEnumType" {
        Active = "Active",
        Reactive = "Reactive",
    }
}
