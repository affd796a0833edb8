use crate::models::EnrichedRecord;

/// Records sharing a derived year, kept in input order.
#[derive(Debug, Clone)]
pub struct YearGroup {
    pub year: i32,
    pub records: Vec<EnrichedRecord>,
}

/// Record counts per year, years in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearCounts {
    pub rows: Vec<(i32, usize)>,
}

impl YearCounts {
    /// Render as CSV text: a header line plus one line per year.
    pub fn to_csv(&self) -> String {
        let mut output = String::from("year,count\n");
        for (year, count) in &self.rows {
            output.push_str(&format!("{},{}\n", year, count));
        }
        output
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, count)| count).sum()
    }
}

/// Record counts per (year, usable) pair, nested by year in
/// first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct UsabilityCounts {
    pub rows: Vec<(i32, bool, usize)>,
}

impl UsabilityCounts {
    /// Render as an aligned pipe table with counts right-justified.
    pub fn to_table(&self) -> String {
        let year_width = self
            .rows
            .iter()
            .map(|(year, _, _)| year.to_string().len())
            .max()
            .unwrap_or(0)
            .max("year".len());
        let usable_width = "usable".len();
        let count_width = self
            .rows
            .iter()
            .map(|(_, _, count)| count.to_string().len())
            .max()
            .unwrap_or(0)
            .max("count".len());

        let mut output = String::new();
        output.push_str(&format!(
            "| {:<yw$} | {:<uw$} | {:>cw$} |\n",
            "year",
            "usable",
            "count",
            yw = year_width,
            uw = usable_width,
            cw = count_width
        ));
        output.push_str(&format!(
            "| {:-<yw$} | {:-<uw$} | {:-<cw$} |\n",
            "",
            "",
            "",
            yw = year_width,
            uw = usable_width,
            cw = count_width
        ));
        for (year, usable, count) in &self.rows {
            output.push_str(&format!(
                "| {:<yw$} | {:<uw$} | {:>cw$} |\n",
                year,
                usable,
                count,
                yw = year_width,
                uw = usable_width,
                cw = count_width
            ));
        }
        output
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, _, count)| count).sum()
    }
}

/// Groups and counts enriched records by derived year. All orderings
/// follow first appearance in the input rather than sorted order.
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn group_by_year(&self, records: &[EnrichedRecord]) -> Vec<YearGroup> {
        let mut groups: Vec<YearGroup> = Vec::new();
        for record in records {
            let position = match groups.iter().position(|group| group.year == record.year) {
                Some(position) => position,
                None => {
                    groups.push(YearGroup {
                        year: record.year,
                        records: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[position].records.push(record.clone());
        }
        groups
    }

    pub fn count_by_year(&self, records: &[EnrichedRecord]) -> YearCounts {
        let mut rows: Vec<(i32, usize)> = Vec::new();
        for record in records {
            match rows.iter_mut().find(|(year, _)| *year == record.year) {
                Some((_, count)) => *count += 1,
                None => rows.push((record.year, 1)),
            }
        }
        YearCounts { rows }
    }

    pub fn count_by_usability(&self, records: &[EnrichedRecord]) -> UsabilityCounts {
        let mut years: Vec<(i32, Vec<(bool, usize)>)> = Vec::new();
        for record in records {
            let usable = record.is_usable();
            let position = match years.iter().position(|(year, _)| *year == record.year) {
                Some(position) => position,
                None => {
                    years.push((record.year, Vec::new()));
                    years.len() - 1
                }
            };
            let flags = &mut years[position].1;
            match flags.iter_mut().find(|(flag, _)| *flag == usable) {
                Some((_, count)) => *count += 1,
                None => flags.push((usable, 1)),
            }
        }

        let mut rows = Vec::new();
        for (year, flags) in years {
            for (usable, count) in flags {
                rows.push((year, usable, count));
            }
        }
        UsabilityCounts { rows }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
