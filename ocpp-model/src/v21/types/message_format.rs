ocpp_enum! {
    MessageFormat as "MessageFormatEnumType" {
        Ascii = "ASCII",
        Html = "HTML",
        Uri = "URI",
        Utf8 = "UTF8",
        QrCode = "QRCODE",
    }
}
