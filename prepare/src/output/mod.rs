use std::io::{self, Write};

use crate::tables::WideRanges;

use self::format::format_range_vec;

mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// шаблон файла с таблицей: {VERSION} - версия Unicode, {RANGES} - диапазоны
const TEMPLATE: &str = include_str!("./../../data/template.rs.txt");

/// подставить версию и диапазоны в шаблон
pub fn render(version: &str, ranges: &WideRanges) -> String
{
    TEMPLATE.replace("{VERSION}", version).replace(
        "{RANGES}",
        format_range_vec(ranges.as_slice(), FORMAT_STRING_LENGTH).as_str(),
    )
}

/// пишем таблицу широких диапазонов
pub fn write<W: Write>(version: &str, ranges: &WideRanges, file: &mut W) -> io::Result<()>
{
    file.write_all(render(version, ranges).as_bytes())
}
