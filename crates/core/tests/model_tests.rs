// ═══════════════════════════════════════════════════════════════════
// Model Tests — Asset, Liability, Budget, Breakdown, RateTable,
// filters, history scope, Settings, Session
// ═══════════════════════════════════════════════════════════════════

use netly_core::errors::CoreError;
use netly_core::models::amount::{finite_or_zero, percentage_of};
use netly_core::models::asset::Asset;
use netly_core::models::budget::{BudgetItem, BudgetItemType, BudgetSummary};
use netly_core::models::category::{active_categories, CategoryType};
use netly_core::models::currency::{CurrencyRate, RateTable};
use netly_core::models::filter::{
    AssetFilter, CategoryFilter, LiabilityStatusFilter, LiquidityFilter,
};
use netly_core::models::history::{HistoryFilter, HistoryScope, PortfolioHistory};
use netly_core::models::liability::Liability;
use netly_core::models::session::Session;
use netly_core::models::settings::Settings;
use netly_core::models::summary::{Breakdown, PortfolioSummary};

// ── Amount helpers ──────────────────────────────────────────────────

mod amount {
    use super::*;

    #[test]
    fn finite_or_zero_coerces() {
        assert_eq!(finite_or_zero(Some(12.5)), 12.5);
        assert_eq!(finite_or_zero(None), 0.0);
        assert_eq!(finite_or_zero(Some(f64::NAN)), 0.0);
        assert_eq!(finite_or_zero(Some(f64::INFINITY)), 0.0);
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage_of(50.0, 200.0), 25.0);
        assert_eq!(percentage_of(50.0, 0.0), 0.0);
        assert_eq!(percentage_of(50.0, -10.0), 0.0);
        assert_eq!(percentage_of(0.0, 0.0), 0.0);
    }
}

// ── Asset ───────────────────────────────────────────────────────────

mod asset {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "id": 7,
            "name": "HDFC Flexi Cap",
            "customAssetTypeId": 3,
            "assetTypeDisplayName": "Mutual Funds",
            "currentValue": 12500.5,
            "purchasePrice": 10.0,
            "quantity": 1000,
            "purchaseDate": "2023-04-01",
            "currency": "INR",
            "illiquid": false
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, Some(7));
        assert_eq!(asset.custom_asset_type_id, 3);
        assert_eq!(asset.category_name(), "Mutual Funds");
        assert_eq!(asset.current_value, 12500.5);
        assert_eq!(asset.total_purchase_price(), 10000.0);
        assert_eq!(
            asset.purchase_date,
            chrono::NaiveDate::from_ymd_opt(2023, 4, 1)
        );
    }

    #[test]
    fn null_current_value_is_zero() {
        let asset: Asset = serde_json::from_str(r#"{"name":"Empty","currentValue":null}"#).unwrap();
        assert_eq!(asset.current_value, 0.0);
        assert_eq!(asset.category_name(), "");
    }

    #[test]
    fn quantity_defaults_to_one() {
        let mut asset = Asset::new("Gold", "Gold", 100.0);
        assert_eq!(asset.quantity_or_default(), 1.0);
        asset.quantity = Some(0.0);
        assert_eq!(asset.quantity_or_default(), 1.0);
        asset.quantity = Some(2.5);
        assert_eq!(asset.quantity_or_default(), 2.5);
    }

    #[test]
    fn derived_gain_loss() {
        let asset = Asset::new("Stock", "Stocks", 150.0).with_purchase(50.0, 2.0);
        assert_eq!(asset.derived_gain_loss(), 50.0);
        assert_eq!(asset.derived_gain_loss_percentage(), 50.0);
    }

    #[test]
    fn no_purchase_price_means_no_gain() {
        let asset = Asset::new("Gift", "Gold", 150.0);
        assert_eq!(asset.derived_gain_loss(), 0.0);
        assert_eq!(asset.derived_gain_loss_percentage(), 0.0);
    }

    #[test]
    fn backend_percentage_wins() {
        let mut asset = Asset::new("Stock", "Stocks", 150.0).with_purchase(100.0, 1.0);
        asset.gain_loss_percentage = Some(12.0);
        assert_eq!(asset.effective_gain_loss_percentage(), 12.0);
        asset.gain_loss_percentage = None;
        assert_eq!(asset.effective_gain_loss_percentage(), 50.0);
    }

    #[test]
    fn validate_requires_name_type_and_value() {
        assert!(Asset::new("Gold", "Gold", 100.0).with_type_id(2).validate().is_ok());
        assert!(Asset::new("Gold", "Gold", 0.0).with_type_id(2).validate().is_ok());

        for asset in [
            Asset::new(" ", "Gold", 100.0).with_type_id(2),
            Asset::new("Gold", "Gold", 100.0),
            Asset::new("Gold", "Gold", -1.0).with_type_id(2),
            Asset::new("Gold", "Gold", f64::NAN).with_type_id(2),
        ] {
            assert!(matches!(asset.validate(), Err(CoreError::Validation(_))), "{asset:?}");
        }
    }

    #[test]
    fn illiquid_defaults_false() {
        assert!(!Asset::new("Cash", "Savings", 1.0).is_illiquid());
        assert!(Asset::new("Land", "Real Estate", 1.0).with_illiquid(true).is_illiquid());
    }
}

// ── Liability ───────────────────────────────────────────────────────

mod liability {
    use super::*;

    #[test]
    fn deserializes_payload() {
        let json = r#"{
            "id": 2,
            "name": "Home Loan",
            "liabilityTypeDisplayName": "Mortgage",
            "currentBalance": 4000000,
            "originalAmount": 5000000,
            "interestRate": 8.5,
            "lender": "SBI",
            "currency": "INR"
        }"#;
        let liability: Liability = serde_json::from_str(json).unwrap();
        assert_eq!(liability.currency.as_deref(), Some("INR"));
        assert_eq!(liability.category_name(), "Mortgage");
        assert_eq!(liability.derived_paid_amount(), 1_000_000.0);
        assert_eq!(liability.derived_repayment_percentage(), 20.0);
        assert!(!liability.is_closed());
    }

    #[test]
    fn zero_balance_is_closed() {
        assert!(Liability::new("Car", "Auto Loan", 0.0).is_closed());
    }

    #[test]
    fn validate_requires_name_type_and_balance() {
        assert!(Liability::new("Car", "Auto Loan", 0.0).with_type_id(1).validate().is_ok());
        assert!(Liability::new("", "Auto Loan", 10.0).with_type_id(1).validate().is_err());
        assert!(Liability::new("Car", "Auto Loan", 10.0).validate().is_err());
        assert!(Liability::new("Car", "Auto Loan", -10.0).with_type_id(1).validate().is_err());
    }

    #[test]
    fn missing_original_amount() {
        let liability = Liability::new("Card", "Credit Card", 500.0);
        assert_eq!(liability.derived_paid_amount(), 0.0);
        assert_eq!(liability.derived_repayment_percentage(), 0.0);
    }
}

// ── Budget ──────────────────────────────────────────────────────────

mod budget {
    use super::*;

    #[test]
    fn item_type_wire_format() {
        let item: BudgetItem = serde_json::from_str(
            r#"{"itemType":"EXPENSE","itemName":"SIP","amount":5000,"isInvestment":true,"displayOrder":2}"#,
        )
        .unwrap();
        assert_eq!(item.item_type, BudgetItemType::Expense);
        assert!(item.counts_as_investment());
        assert_eq!(item.order_key(), 2);

        let json = serde_json::to_string(&BudgetItem::income("Salary", 100.0)).unwrap();
        assert!(json.contains(r#""itemType":"INCOME""#));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn display() {
        assert_eq!(BudgetItemType::Income.to_string(), "INCOME");
        assert_eq!(BudgetItemType::Expense.to_string(), "EXPENSE");
    }

    #[test]
    fn income_never_counts_as_investment() {
        let mut item = BudgetItem::income("Bonus", 10.0);
        item.is_investment = true;
        assert!(!item.counts_as_investment());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = BudgetItem::income("  ", 10.0).validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        assert!(BudgetItem::expense("Rent", 0.0, false).validate().is_err());
        assert!(BudgetItem::expense("Rent", -5.0, false).validate().is_err());
        assert!(BudgetItem::expense("Rent", f64::NAN, false).validate().is_err());
        assert!(BudgetItem::expense("Rent", 25000.0, false).validate().is_ok());
    }

    #[test]
    fn null_investment_flag_reads_as_false() {
        let items: Vec<BudgetItem> = serde_json::from_str(
            r#"[
                {"itemType":"INCOME","itemName":"Salary","amount":100000,"isInvestment":null},
                {"itemType":"EXPENSE","itemName":"Groceries","amount":8000,"isInvestment":null},
                {"itemType":"EXPENSE","itemName":"SIP","amount":5000,"isInvestment":true}
            ]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 3);
        assert!(!items[0].is_investment);
        assert!(!items[1].counts_as_investment());
        assert!(items[2].counts_as_investment());
    }

    #[test]
    fn summary_with_nulls() {
        let summary: BudgetSummary =
            serde_json::from_str(r#"{"totalIncome":100000,"totalExpenses":null}"#).unwrap();
        assert_eq!(summary.total_income, 100000.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
    }
}

// ── Breakdown / summary ─────────────────────────────────────────────

mod breakdown {
    use super::*;

    #[test]
    fn preserves_json_order() {
        let b: Breakdown = serde_json::from_str(r#"{"Stocks":500,"Bonds":0,"Gold":1500}"#).unwrap();
        let names: Vec<&str> = b.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Stocks", "Bonds", "Gold"]);
        assert_eq!(b.total(), 2000.0);
    }

    #[test]
    fn null_values_become_zero() {
        let b: Breakdown = serde_json::from_str(r#"{"Cash":null}"#).unwrap();
        assert_eq!(b.get("Cash"), Some(0.0));
    }

    #[test]
    fn null_breakdown_is_empty() {
        let b: Breakdown = serde_json::from_str("null").unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut b: Breakdown = [("A", 1.0), ("B", 2.0)].into_iter().collect();
        b.insert("A", 5.0);
        let entries: Vec<(&str, f64)> = b.iter().collect();
        assert_eq!(entries, vec![("A", 5.0), ("B", 2.0)]);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn serializes_as_map_in_order() {
        let b: Breakdown = [("Z", 1.0), ("A", 2.0)].into_iter().collect();
        assert_eq!(serde_json::to_string(&b).unwrap(), r#"{"Z":1.0,"A":2.0}"#);
    }

    #[test]
    fn portfolio_summary_payload() {
        let json = r#"{
            "totalValue": 2000,
            "totalGainLoss": 200,
            "totalGainLossPercentage": 11.1,
            "totalAssets": 3,
            "breakdown": {"typeBreakdown": {"Stocks": 500, "Gold": 1500}},
            "totalLiabilities": 800,
            "totalLiabilityCount": 1,
            "liabilityBreakdown": {"typeBreakdown": {"Home Loan": 800}},
            "netWorth": 1200
        }"#;
        let summary: PortfolioSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_assets, 3);
        assert_eq!(summary.breakdown.type_breakdown.get("Gold"), Some(1500.0));
        assert_eq!(summary.liability_breakdown.type_breakdown.len(), 1);
        assert_eq!(summary.net_worth, 1200.0);
    }

    #[test]
    fn empty_summary_payload() {
        let summary: PortfolioSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, PortfolioSummary::default());
    }
}

// ── RateTable ───────────────────────────────────────────────────────

mod rate_table {
    use super::*;

    #[test]
    fn validated_rate_is_upper_cased() {
        let rate = CurrencyRate::new(" eur ", "Euro", 90.5).validated().unwrap();
        assert_eq!(rate.currency_code, "EUR");
        assert_eq!(rate.rate_to_inr, 90.5);
    }

    #[test]
    fn validated_rejects_bad_fields() {
        assert!(matches!(
            CurrencyRate::new("EU", "Euro", 90.0).validated(),
            Err(CoreError::InvalidCurrencyCode(_))
        ));
        assert!(CurrencyRate::new("EUR", "", 90.0).validated().is_err());
        assert!(CurrencyRate::new("EUR", "Euro", -1.0).validated().is_err());
        assert!(CurrencyRate::new("EUR", "Euro", f64::INFINITY).validated().is_err());
    }

    #[test]
    fn base_is_always_present() {
        let table = RateTable::base_only("inr");
        assert_eq!(table.base_currency(), "INR");
        assert_eq!(table.rate_for("INR"), Some(1.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_rates_skips_inactive_and_invalid() {
        let mut inactive = CurrencyRate::new("EUR", "Euro", 90.0);
        inactive.is_active = false;
        let rates = vec![
            CurrencyRate::new("USD", "US Dollar", 83.0),
            inactive,
            CurrencyRate::new("XXX", "Broken", 0.0),
            CurrencyRate::new("INR", "Rupee", 2.0),
        ];
        let table = RateTable::from_rates(&rates, "INR");
        assert_eq!(table.codes(), vec!["INR", "USD"]);
        assert_eq!(table.rate_for("INR"), Some(1.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = RateTable::default();
        table.insert("usd", 83.0);
        assert_eq!(table.rate_for("USD"), Some(83.0));
        assert_eq!(table.rate_for(" Usd "), Some(83.0));
        assert_eq!(table.rate_for("GBP"), None);
    }

    #[test]
    fn base_cannot_be_removed() {
        let mut table = RateTable::default();
        table.insert("USD", 83.0);
        assert!(!table.remove("INR"));
        assert!(table.remove("usd"));
        assert!(!table.remove("USD"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rate_payload() {
        let rate: CurrencyRate = serde_json::from_str(
            r#"{"id":1,"currencyCode":"USD","currencyName":"US Dollar","rateToInr":83.25}"#,
        )
        .unwrap();
        assert!(rate.is_active);
        assert_eq!(rate.rate_to_inr, 83.25);
    }
}

// ── Categories ──────────────────────────────────────────────────────

mod category {
    use super::*;

    #[test]
    fn validate_requires_display_name() {
        assert!(CategoryType::new("Bonds").validate().is_ok());
        assert!(matches!(
            CategoryType::new("   ").validate(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn inactive_categories_are_dropped() {
        let mut retired = CategoryType::new("Crypto");
        retired.is_active = false;
        let types = vec![CategoryType::new("Stocks"), retired, CategoryType::new("Gold")];
        let names: Vec<String> = active_categories(types)
            .into_iter()
            .map(|t| t.display_name)
            .collect();
        assert_eq!(names, vec!["Stocks", "Gold"]);
    }

    #[test]
    fn is_active_defaults_true() {
        let t: CategoryType = serde_json::from_str(r#"{"displayName":"Stocks"}"#).unwrap();
        assert!(t.is_active);
    }
}

// ── Filters ─────────────────────────────────────────────────────────

mod filters {
    use super::*;

    #[test]
    fn category_all_sentinel() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Gold".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Named("Gold".into())
        );
        assert!(CategoryFilter::All.matches("anything"));
        assert!(!CategoryFilter::Named("Gold".into()).matches("gold"));
    }

    #[test]
    fn liquidity_parse_and_match() {
        assert_eq!("illiquid".parse::<LiquidityFilter>().unwrap(), LiquidityFilter::Illiquid);
        assert!(LiquidityFilter::Liquid.matches(false));
        assert!(!LiquidityFilter::Liquid.matches(true));
        assert!(matches!(
            "sticky".parse::<LiquidityFilter>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn liability_status_parse_and_match() {
        assert_eq!(
            "closed".parse::<LiabilityStatusFilter>().unwrap(),
            LiabilityStatusFilter::Closed
        );
        assert!(LiabilityStatusFilter::Active.matches(1.0));
        assert!(!LiabilityStatusFilter::Active.matches(0.0));
        assert!(LiabilityStatusFilter::Closed.matches(0.0));
        assert!("paid".parse::<LiabilityStatusFilter>().is_err());
    }

    #[test]
    fn default_asset_filter_selects_all() {
        let filter = AssetFilter::all();
        assert_eq!(filter.category, CategoryFilter::All);
        assert!(filter.search.is_empty());
        assert_eq!(filter.liquidity, LiquidityFilter::All);
    }
}

// ── History ─────────────────────────────────────────────────────────

mod history {
    use super::*;

    #[test]
    fn overview_path() {
        assert_eq!(
            HistoryFilter::overview().path_segments(),
            vec!["portfolio-snapshots", "history"]
        );
        assert_eq!(HistoryFilter::default().weeks, 12);
    }

    #[test]
    fn scoped_paths() {
        assert_eq!(
            HistoryFilter::new(HistoryScope::Asset(9)).path_segments(),
            vec!["portfolio-snapshots", "history", "asset", "9"]
        );
        assert_eq!(
            HistoryFilter::new(HistoryScope::LiabilityType("Home Loan".into())).path_segments(),
            vec!["portfolio-snapshots", "history", "liability-type", "Home Loan"]
        );
    }

    #[test]
    fn payload_with_null_points() {
        let history: PortfolioHistory = serde_json::from_str(
            r#"{"dates":["2024-01-07"],"totalAssets":[null],"totalLiabilities":[1],"netWorth":[2],"totalGains":[3]}"#,
        )
        .unwrap();
        assert_eq!(history.total_assets, vec![None]);
        assert_eq!(history.total_gains, vec![Some(3.0)]);
    }
}

// ── Settings ────────────────────────────────────────────────────────

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.api_base_url, "http://localhost:8080/api");
        assert_eq!(s.base_currency, "INR");
        assert_eq!(s.display_currency, "INR");
        assert_eq!(s.history_weeks, 12);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{"displayCurrency":"USD"}"#).unwrap();
        assert_eq!(s.display_currency, "USD");
        assert_eq!(s.base_currency, "INR");
        assert_eq!(s.request_timeout_secs, 30);
    }

    #[test]
    fn json_round_trip() {
        let s = Settings::default().with_api_base_url("https://netly.example/api");
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn display_currency_is_validated() {
        let mut s = Settings::default();
        s.set_display_currency("eur").unwrap();
        assert_eq!(s.display_currency, "EUR");

        let err = s.set_display_currency("EURO").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCurrencyCode(_)));
        assert_eq!(s.display_currency, "EUR");
        assert!(s.set_display_currency("U$D").is_err());
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        assert!(matches!(
            Settings::from_json("{"),
            Err(CoreError::Deserialization(_))
        ));
    }
}

// ── Session ─────────────────────────────────────────────────────────

mod session {
    use super::*;

    #[test]
    fn anonymous_has_no_token() {
        let s = Session::anonymous();
        assert!(!s.is_authenticated());
        assert_eq!(s.token(), None);
        assert!(!s.is_expired());
    }

    #[test]
    fn expire_drops_token_and_flags() {
        let mut s = Session::with_token("abc");
        assert_eq!(s.token(), Some("abc"));
        s.expire();
        assert!(!s.is_authenticated());
        assert!(s.is_expired());
    }

    #[test]
    fn clear_is_not_an_expiry() {
        let mut s = Session::with_token("abc");
        s.clear();
        assert!(!s.is_authenticated());
        assert!(!s.is_expired());
    }
}
