ocpp_enum! {
    DerControlStatus as "DERControlStatusEnumType" {
        Accepted = "Accepted",
        Rejected = "Rejected",
        NotSupported = "NotSupported",
        NotFound = "NotFound",
    }
}
