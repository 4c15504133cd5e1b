use rocpp_model::format::json;
use rocpp_model::v21::messages::notify_ev_charging_needs::NotifyEvChargingNeedsRequest;
use rocpp_model::v21::messages::set_default_tariff::SetDefaultTariffRequest;
use rocpp_model::v21::types::{
    ChargingNeeds, CostDetails, DayOfWeek, DerChargingParameters, EnergyTransferMode, Price,
    Tariff, TariffConditions, TariffConditionsFixed, TariffCost, TariffEnergy, TariffEnergyPrice,
    TariffFixed, TariffFixedPrice, TaxRate, TotalCost, TotalPrice, TotalUsage,
};
use rocpp_model::{Decimal, Model, ModelError, Rule};

use crate::harness::harness::{init_logger, violation};

fn cardinality(min: u64, max: u64) -> Rule {
    Rule::Cardinality {
        min: Some(min),
        max: Some(max),
    }
}

fn max_chars(max: u64) -> Rule {
    Rule::Length {
        min: None,
        max: Some(max),
    }
}

fn days(count: usize) -> Vec<DayOfWeek> {
    DayOfWeek::ALL.iter().copied().cycle().take(count).collect()
}

fn energy_tariff(conditions: TariffConditions) -> Result<Tariff, ModelError> {
    let mut off_peak = TariffEnergyPrice::new(Decimal::new(18, 2));
    off_peak.conditions = Some(conditions);
    let mut tariff = Tariff::new("T-2025-01", "EUR")?;
    tariff.energy = Some(TariffEnergy::new(vec![
        TariffEnergyPrice::new(Decimal::new(35, 2)),
        off_peak,
    ])?);
    tariff.validated()
}

fn with_fixed_fee(tariff: &Tariff, brand: &str, recognition: &str) -> Result<Tariff, ModelError> {
    let mut price = TariffFixedPrice::new(Decimal::new(150, 2));
    price.conditions = Some(TariffConditionsFixed {
        payment_brand: Some(brand.to_owned()),
        payment_recognition: Some(recognition.to_owned()),
        ..Default::default()
    });
    let mut tariff = tariff.clone();
    tariff.fixed_fee = Some(TariffFixed::new(vec![price])?);
    tariff.validated()
}

fn tariffs() -> Result<(), ModelError> {
    let weekend = TariffConditions {
        day_of_week: Some(vec![DayOfWeek::Saturday, DayOfWeek::Sunday]),
        ..Default::default()
    };
    let tariff = energy_tariff(weekend)?;
    let request = SetDefaultTariffRequest::new(1, tariff.clone())?;

    // request -> tariff -> energy -> price -> conditions
    let mut broken = request.clone();
    if let Some(energy) = broken.tariff.energy.as_mut() {
        energy.prices[1].conditions = Some(TariffConditions {
            day_of_week: Some(Vec::new()),
            ..Default::default()
        });
    }
    let err = violation(broken.check());
    assert_eq!(err.field(), Some("tariff.energy.prices[1].conditions.dayOfWeek"));
    assert_eq!(err.rule(), Some(&cardinality(1, 7)));
    assert!(request.is_valid());

    for (count, valid) in [(1, true), (7, true), (8, false)] {
        let conditions = TariffConditions {
            day_of_week: Some(days(count)),
            ..Default::default()
        };
        let result = energy_tariff(conditions);
        assert_eq!(result.is_ok(), valid, "{count} days");
        if !valid {
            assert_eq!(
                violation(result).field(),
                Some("energy.prices[1].conditions.dayOfWeek")
            );
        }
    }

    // bounds count characters, not bytes
    assert!(with_fixed_fee(&tariff, &"é".repeat(20), &"x".repeat(20)).is_ok());
    let err = violation(with_fixed_fee(&tariff, &"b".repeat(21), "Debit"));
    assert_eq!(err.field(), Some("fixedFee.prices[0].conditions.paymentBrand"));
    assert_eq!(err.rule(), Some(&max_chars(20)));
    let err = violation(with_fixed_fee(&tariff, "Visa", &"r".repeat(21)));
    assert_eq!(
        err.field(),
        Some("fixedFee.prices[0].conditions.paymentRecognition")
    );

    let tax = TaxRate::new("Federal", Decimal::new(19, 0))?;
    let capped = |count: usize| {
        let mut tariff = tariff.clone();
        tariff.max_cost = Some(Price {
            excl_tax: Some(Decimal::new(5000, 2)),
            tax_rates: Some(vec![tax.clone(); count]),
            ..Default::default()
        });
        tariff.validated()
    };
    assert!(capped(1).is_ok());
    assert!(capped(5).is_ok());
    for count in [0, 6] {
        let err = violation(capped(count));
        assert_eq!(err.field(), Some("maxCost.taxRates"));
        assert_eq!(err.rule(), Some(&cardinality(1, 5)));
    }

    let mut long_type = tax.clone();
    long_type.tax_type = "t".repeat(21);
    let mut tariff = tariff.clone();
    tariff.min_cost = Some(Price {
        incl_tax: Some(Decimal::new(100, 2)),
        tax_rates: Some(vec![tax, long_type]),
        ..Default::default()
    });
    assert_eq!(
        violation(tariff.check()).field(),
        Some("minCost.taxRates[1].type")
    );
    Ok(())
}

fn cost_details() -> Result<(), ModelError> {
    let total = TotalCost::new("EUR", TariffCost::NormalCost, TotalPrice::default())?;
    let usage = TotalUsage::new(Decimal::new(125, 1), 3600, 0);
    let mut details = CostDetails::new(total, usage)?;
    details.failure_to_calculate = Some(true);

    details.failure_reason = Some("r".repeat(500));
    assert!(details.is_valid());
    details.failure_reason = Some("r".repeat(501));
    let err = violation(details.check());
    assert_eq!(err.field(), Some("failureReason"));
    assert_eq!(err.rule(), Some(&max_chars(500)));

    let mut details = details.clone();
    details.failure_reason = None;
    details.total_cost.currency = "EURO".to_owned();
    assert_eq!(
        violation(details.check()).field(),
        Some("totalCost.currency")
    );
    Ok(())
}

fn der_parameters() -> Result<(), ModelError> {
    let at_limit = "i".repeat(50);
    let full = DerChargingParameters {
        ev_inverter_manufacturer: Some(at_limit.clone()),
        ev_inverter_model: Some(at_limit.clone()),
        ev_inverter_serial_number: Some(at_limit.clone()),
        ev_inverter_sw_version: Some(at_limit.clone()),
        ev_inverter_hw_version: Some(at_limit),
        ..Default::default()
    };
    assert!(full.is_valid());

    let over = Some("i".repeat(51));
    let cases: [(&str, fn(&mut DerChargingParameters, Option<String>)); 5] = [
        ("evInverterManufacturer", |p, v| p.ev_inverter_manufacturer = v),
        ("evInverterModel", |p, v| p.ev_inverter_model = v),
        ("evInverterSerialNumber", |p, v| p.ev_inverter_serial_number = v),
        ("evInverterSwVersion", |p, v| p.ev_inverter_sw_version = v),
        ("evInverterHwVersion", |p, v| p.ev_inverter_hw_version = v),
    ];
    for (field, set) in cases {
        let mut needs = ChargingNeeds::new(EnergyTransferMode::AcBptDer);
        let mut parameters = full.clone();
        set(&mut parameters, over.clone());
        needs.der_charging_parameters = Some(parameters);
        let err = violation(NotifyEvChargingNeedsRequest::new(needs, 1));
        assert_eq!(
            err.field(),
            Some(format!("chargingNeeds.derChargingParameters.{field}").as_str())
        );
        assert_eq!(err.rule(), Some(&max_chars(50)));
    }
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    init_logger();
    tariffs()?;
    cost_details()?;
    der_parameters()?;

    // the same nesting reached through the JSON codec
    let payload = concat!(
        r#"{"evseId":1,"tariff":{"tariffId":"T-1","currency":"EUR","energy":{"prices":["#,
        r#"{"priceKwh":0.35},{"priceKwh":0.18,"conditions":{"dayOfWeek":[]}}]}}}"#
    );
    let err = violation(json::decode::<SetDefaultTariffRequest>(payload));
    assert_eq!(err.field(), Some("tariff.energy.prices[1].conditions.dayOfWeek"));
    let request: SetDefaultTariffRequest =
        json::decode(&payload.replace("[]", r#"["Monday"]"#))?;
    assert_eq!(
        request.tariff.energy.map(|energy| energy.prices[0].price_kwh),
        Some(Decimal::new(35, 2))
    );
    Ok(())
}
