// ============================================================================
// Basic Usage Example
// ============================================================================

use currency_precision::prelude::*;
use std::str::FromStr;
use std::sync::Arc;

fn main() -> Result<(), CurrencyError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Currency Precision Example ===\n");

    // Players known by name
    let names = Arc::new(NameDirectory::new());
    let steve = AccountId::new();
    let alex = AccountId::new();
    names.register("steve", steve);
    names.register("alex", alex);

    // One currency per preset precision
    let coins = create_from_config(CurrencyConfig::coins("economy:coins"), names.clone())?;
    let gold = create_from_config(CurrencyConfig::gold("economy:gold"), names.clone())?;
    let credits = CurrencyBuilder::from_config(CurrencyConfig::credits("bank:credits"))
        .with_type_name("BankCredits")
        .with_resolver(names)
        .build()?;

    println!("Created {:?}", coins);
    println!("Created {:?}", gold);
    println!("Created {:?}\n", credits);

    // Coins: whole numbers, writes round then clamp
    println!("=== Coins (i32) ===");
    coins.set_double_value_by_name("steve", 24.6);
    println!("steve after set 24.6: {}", coins.int_value(&steve));
    coins.add_long_value_by_name("steve", i64::MAX);
    println!("steve after add i64::MAX: {}", coins.long_value(&steve));

    // Gold: fractional balances, reads truncate when narrowing
    println!("\n=== Gold (f64) ===");
    gold.add_double_value_by_name("alex", 12.75);
    println!("alex as double: {}", gold.double_value(&alex));
    println!("alex as int: {}", gold.int_value(&alex));
    println!("alex as decimal: {}", gold.big_decimal_value(&alex));

    // Credits: exact decimal arithmetic
    println!("\n=== Credits (BigDecimal) ===");
    for _ in 0..10 {
        credits.add_double_value_by_name("alex", 0.1);
    }
    println!("alex after ten 0.1 deposits: {}", credits.big_decimal_value(&alex));
    credits.add_big_decimal_value(&alex, BigDecimal::from_str("1e30").unwrap_or_default());
    println!("alex as long (clamped): {}", credits.long_value(&alex));
    match credits.long_value_exact(&alex) {
        Ok(value) => println!("alex exact: {}", value),
        Err(e) => println!("alex exact: {}", e),
    }

    // Unknown names read and write as zero
    println!("\n=== Unknown Names ===");
    println!("nobody set -> previous {}", gold.set_int_value_by_name("nobody", 5));
    println!("nobody balance: {}", gold.int_value_by_name("nobody"));

    // Registry narrowing
    println!("\n=== Currency Types ===");
    let typed_gold = CurrencyType::double().cast(&gold)?;
    typed_gold.add_balance(&alex, 0.25);
    println!("alex gold via native view: {}", typed_gold.balance(&alex));

    for currency in [&coins, &gold, &credits] {
        println!(
            "{}: int={} double={} big_decimal={}",
            currency.key(),
            CurrencyType::int().is_instance(currency),
            CurrencyType::double().is_instance(currency),
            CurrencyType::big_decimal().is_instance(currency),
        );
    }

    if let Err(e) = CurrencyType::int().cast(&credits) {
        println!("cast failed: {}", e);
    }

    Ok(())
}
