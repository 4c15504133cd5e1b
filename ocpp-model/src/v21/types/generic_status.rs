ocpp_enum! {
    GenericStatus as "GenericStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
    }
}
