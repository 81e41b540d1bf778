use std::collections::HashMap;

use crate::tables::WideRanges;

/// размер таблицы в байтах: элементы шаблона - core::ops::RangeInclusive<u32>
pub fn table_size(ranges: &WideRanges) -> usize
{
    ranges.len() * core::mem::size_of::<core::ops::RangeInclusive<u32>>()
}

/// информация о подготовленной таблице
pub fn print(version: &str, ranges: &WideRanges, stats: &HashMap<String, usize>)
{
    println!(
        "\nUnicode {}:\n  \
        диапазонов в таблице: {}\n  \
        широких кодпоинтов: {}\n  \
        размер таблицы, байт: {}",
        version,
        ranges.len(),
        ranges.codepoints(),
        table_size(ranges),
    );

    println!();

    let mut keys: Vec<&String> = stats.keys().collect();
    keys.sort_by(|a, b| stats[*b].cmp(&stats[*a]).then(a.cmp(b)));

    for key in keys {
        println!("  {}: {}", key, stats[key]);
    }

    println!();
}
