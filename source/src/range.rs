use core::fmt;

use crate::properties::PropertiesError;

/// диапазон кодпоинтов, границы включены
///
/// в файлах UCD записывается как `XXXX` (один кодпоинт) или `XXXX..YYYY`
///
/// поля закрыты: начало никогда не больше конца
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct CodepointRange
{
    start: u32,
    end: u32,
}

impl CodepointRange
{
    /// диапазон start ..= end
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self
    {
        assert!(start <= end, "начало диапазона больше его конца");

        Self { start, end }
    }

    /// диапазон из одного кодпоинта
    #[inline]
    pub const fn single(code: u32) -> Self
    {
        Self {
            start: code,
            end: code,
        }
    }

    /// первый кодпоинт
    #[inline]
    pub const fn start(&self) -> u32
    {
        self.start
    }

    /// последний кодпоинт (включительно)
    #[inline]
    pub const fn end(&self) -> u32
    {
        self.end
    }

    /// продлить диапазон до end, если end лежит дальше текущего конца
    #[inline]
    pub fn extend_to(&mut self, end: u32)
    {
        self.end = self.end.max(end);
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.start <= code && code <= self.end
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn codepoints(&self) -> u64
    {
        u64::from(self.end - self.start) + 1
    }
}

impl TryFrom<&str> for CodepointRange
{
    type Error = PropertiesError;

    fn try_from(token: &str) -> Result<Self, Self::Error>
    {
        let malformed = || PropertiesError::MalformedToken(token.to_owned());

        // "1..2..3" сюда тоже попадает: вторая часть "2..3" не разбирается как число
        let (start, end) = match token.split_once("..") {
            Some((start, end)) => (parse_code(start), parse_code(end)),
            None => (parse_code(token), parse_code(token)),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end => Ok(Self { start, end }),
            _ => Err(malformed()),
        }
    }
}

/// шестнадцатеричный код без префикса и знака
fn parse_code(hex: &str) -> Option<u32>
{
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}

impl fmt::Display for CodepointRange
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.start == self.end {
            true => write!(f, "{:04X}", self.start),
            false => write!(f, "{:04X}..{:04X}", self.start, self.end),
        }
    }
}
