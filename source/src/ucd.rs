use core::fmt;

use crate::properties::{EastAsianWidth, EmojiProperty, PropertiesError};
use crate::CodepointRange;

/// файлы UCD, из которых берутся широкие кодпоинты
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum UcdFile
{
    EastAsianWidth,
    EmojiData,
}

impl UcdFile
{
    pub const ALL: [Self; 2] = [Self::EastAsianWidth, Self::EmojiData];

    pub fn file_name(&self) -> &'static str
    {
        match self {
            Self::EastAsianWidth => "EastAsianWidth.txt",
            Self::EmojiData => "emoji-data.txt",
        }
    }

    /// путь к файлу относительно каталога ucd конкретной версии Unicode
    pub fn ucd_path(&self) -> &'static str
    {
        match self {
            Self::EastAsianWidth => "EastAsianWidth.txt",
            Self::EmojiData => "emoji/emoji-data.txt",
        }
    }

    /// диапазон из строки данных, если строка описывает широкие кодпоинты
    pub fn wide_range(&self, line: &str) -> Result<Option<CodepointRange>, PropertiesError>
    {
        let (range, is_wide) = match self {
            Self::EastAsianWidth => {
                let (range, width) = EastAsianWidth::parse_line(line)?;
                (range, width.is_wide())
            }
            Self::EmojiData => {
                let (range, property) = EmojiProperty::parse_line(line)?;
                (range, property.is_wide())
            }
        };

        Ok(match is_wide {
            true => Some(range),
            false => None,
        })
    }
}

impl fmt::Display for UcdFile
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.file_name())
    }
}
