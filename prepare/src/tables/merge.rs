use core::cmp::Ordering;

use unicode_wide_ranges_source::CodepointRange;

/// итоговый список широких диапазонов:
///     - отсортирован по возрастанию
///     - диапазоны не пересекаются
///     - соседние диапазоны не примыкают друг к другу (между ними есть хотя бы один кодпоинт)
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct WideRanges(Vec<CodepointRange>);

impl WideRanges
{
    /// объединить диапазоны в любом порядке, с повторами и пересечениями
    ///
    /// сортируем по началу и за один проход сливаем пересекающиеся и примыкающие диапазоны
    pub fn merge<I: IntoIterator<Item = CodepointRange>>(ranges: I) -> Self
    {
        let mut ranges: Vec<CodepointRange> = ranges.into_iter().collect();
        ranges.sort_unstable();

        let mut merged: Vec<CodepointRange> = Vec::with_capacity(ranges.len());

        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start() <= last.end().saturating_add(1) => {
                    last.extend_to(range.end());
                }
                _ => merged.push(range),
            }
        }

        Self(merged)
    }

    #[inline]
    pub fn as_slice(&self) -> &[CodepointRange]
    {
        self.0.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, CodepointRange>
    {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }

    /// входит ли кодпоинт в один из диапазонов (бинарный поиск)
    pub fn contains(&self, code: u32) -> bool
    {
        self.0
            .binary_search_by(|range| match range.contains(code) {
                true => Ordering::Equal,
                false => range.start().cmp(&code),
            })
            .is_ok()
    }

    /// общее количество кодпоинтов во всех диапазонах
    pub fn codepoints(&self) -> u64
    {
        self.0.iter().map(CodepointRange::codepoints).sum()
    }
}

impl<'a> IntoIterator for &'a WideRanges
{
    type Item = &'a CodepointRange;
    type IntoIter = core::slice::Iter<'a, CodepointRange>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.0.iter()
    }
}
