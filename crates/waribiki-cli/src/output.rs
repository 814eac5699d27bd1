//! Output formatting module

use serde::Serialize;
use waribiki_app::app::{distance_notice, DistanceNotice, Quote};
use waribiki_domain::model::{FarePair, OperatorRule, RouteFare};
use waribiki_types::{DisabilityClass, OutputFormat, Result, TravelMode, Yen};

/// 16420 -> "16,420円"
pub fn format_yen(amount: Yen) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('円');
    out
}

#[derive(Serialize)]
struct QuoteView<'a> {
    operator: &'a str,
    disability_class: DisabilityClass,
    travel_mode: TravelMode,
    base_fare: Yen,
    express_fare: Yen,
    is_over_distance: bool,
    prefilled: bool,
    passenger_base: Yen,
    passenger_express: Yen,
    passenger_total: Yen,
    caregiver_base: Option<Yen>,
    caregiver_express: Option<Yen>,
    caregiver_total: Option<Yen>,
    grand_total: Yen,
}

impl<'a> QuoteView<'a> {
    fn new(quote: &'a Quote) -> Self {
        let result = &quote.result;
        let with_caregiver = result.travel_mode.has_caregiver();
        Self {
            operator: quote.rule.operator.id(),
            disability_class: quote.input.disability_class,
            travel_mode: quote.input.travel_mode,
            base_fare: quote.input.base_fare,
            express_fare: quote.input.express_fare,
            is_over_distance: quote.input.is_over_distance,
            prefilled: quote.prefill.is_some(),
            passenger_base: result.passenger_base,
            passenger_express: result.passenger_express,
            passenger_total: result.passenger_total(),
            caregiver_base: with_caregiver.then_some(result.caregiver_base),
            caregiver_express: with_caregiver.then_some(result.caregiver_express),
            caregiver_total: result.caregiver_total(),
            grand_total: result.grand_total(),
        }
    }
}

pub fn output_quote(output_format: OutputFormat, quote: &Quote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&QuoteView::new(quote))?;
        println!("{}", content);
        return Ok(());
    }

    let input = &quote.input;
    let result = &quote.result;

    println!("\nFare Calculation");
    println!("================");
    println!(
        "Operator:        {} ({})",
        quote.rule.operator.display_name(),
        quote.rule.operator.id()
    );
    println!("Class:           {}", input.disability_class.label());
    println!("Travel mode:     {}", input.travel_mode.label());
    println!(
        "Base fare:       {}{}",
        format_yen(input.base_fare),
        if quote.prefill.is_some() { " (運賃表)" } else { "" }
    );
    println!("Express fare:    {}", format_yen(input.express_fare));
    if quote.rule.has_distance_discount() {
        println!(
            "Over distance:   {}",
            if input.is_over_distance { "Yes" } else { "No" }
        );
    }
    println!("Rounding:        10円未満{}", quote.rule.rounding.label());

    println!("\n--- 本人 / Passenger ---");
    println!("運賃:            {}", format_yen(result.passenger_base));
    println!("特急料金:        {}", format_yen(result.passenger_express));
    println!("小計:            {}", format_yen(result.passenger_total()));

    if let Some(caregiver_total) = result.caregiver_total() {
        println!("\n--- 介護者 / Caregiver ---");
        println!("運賃:            {}", format_yen(result.caregiver_base));
        println!("特急料金:        {}", format_yen(result.caregiver_express));
        println!("小計:            {}", format_yen(caregiver_total));
    }

    println!("\n合計 / Total:    {}", format_yen(result.grand_total()));

    Ok(())
}

pub fn output_fare(output_format: OutputFormat, from: &str, to: &str, fare: &FarePair) -> Result<()> {
    if output_format == OutputFormat::Json {
        let route = RouteFare::new(from, to, fare.base, fare.express);
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        println!("{} - {}", from, to);
        println!("運賃:            {}", format_yen(fare.base));
        println!("特急料金:        {}", format_yen(fare.express));
    }
    Ok(())
}

#[derive(Serialize)]
struct OperatorView {
    #[serde(flatten)]
    rule: OperatorRule,
    name: &'static str,
    notice: DistanceNotice,
}

pub fn output_operators(output_format: OutputFormat, rules: &[OperatorRule]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let views: Vec<_> = rules
            .iter()
            .map(|rule| OperatorView {
                rule: *rule,
                name: rule.operator.display_name(),
                notice: distance_notice(rule),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("{:<12} {:<10} {:>10} {:>8}", "ID", "会社", "単独割引", "端数");
    println!("{}", "-".repeat(46));
    for rule in rules {
        let limit = rule
            .distance_limit_km
            .map(|km| format!("{}km超", km))
            .unwrap_or_else(|| "なし".to_string());
        println!(
            "{:<12} {:<10} {:>10} {:>8}",
            rule.operator.id(),
            rule.operator.display_name(),
            limit,
            rule.rounding.label()
        );
    }
    Ok(())
}

pub fn output_routes(output_format: OutputFormat, routes: &[RouteFare]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(routes)?);
        return Ok(());
    }

    if routes.is_empty() {
        println!("No routes.");
        return Ok(());
    }

    println!("{:<16} {:>12} {:>12}", "区間", "運賃", "特急料金");
    println!("{}", "-".repeat(42));
    for route in routes {
        println!(
            "{:<16} {:>12} {:>12}",
            format!("{}-{}", route.from, route.to),
            format_yen(route.base),
            format_yen(route.express)
        );
    }
    Ok(())
}
