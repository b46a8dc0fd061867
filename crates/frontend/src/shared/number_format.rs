//! Утилиты форматирования цен и рейтингов

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Цена блюда: целые без копеек, остальные с двумя знаками
pub fn format_price(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!("${}", format_number_with_decimals(value, decimals))
}

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("⭐ {}", format_number_with_decimals(r, 1)),
        None => "No rating".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1 234 567");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1 234.5");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "$10");
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(1250.0), "$1 250");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(4.5)), "⭐ 4.5");
        assert_eq!(format_rating(Some(4.0)), "⭐ 4.0");
        assert_eq!(format_rating(None), "No rating");
    }
}
