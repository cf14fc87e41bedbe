use std::collections::BTreeSet;
use std::fmt;

use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    /// Identifier understood by the `employment_type` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id.trim()))
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum yearly package, in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SalaryRange {
    TenLpa,
    TwentyLpa,
    ThirtyLpa,
    FortyLpa,
}

impl SalaryRange {
    pub const ALL: [SalaryRange; 4] = [
        SalaryRange::TenLpa,
        SalaryRange::TwentyLpa,
        SalaryRange::ThirtyLpa,
        SalaryRange::FortyLpa,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SalaryRange::TenLpa => "1000000",
            SalaryRange::TwentyLpa => "2000000",
            SalaryRange::ThirtyLpa => "3000000",
            SalaryRange::FortyLpa => "4000000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryRange::TenLpa => "10 LPA and above",
            SalaryRange::TwentyLpa => "20 LPA and above",
            SalaryRange::ThirtyLpa => "30 LPA and above",
            SalaryRange::FortyLpa => "40 LPA and above",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.id() == id.trim())
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The independently changing facets of the job search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    selected_types: BTreeSet<EmploymentType>,
    salary_floor: Option<SalaryRange>,
    search_text: String,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the type when absent, removes it when present.
    pub fn toggle_type(&mut self, kind: EmploymentType) {
        if !self.selected_types.remove(&kind) {
            self.selected_types.insert(kind);
        }
    }

    pub fn select_salary(&mut self, range: SalaryRange) {
        self.salary_floor = Some(range);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn is_selected(&self, kind: EmploymentType) -> bool {
        self.selected_types.contains(&kind)
    }

    pub fn selected_types(&self) -> impl Iterator<Item = EmploymentType> + '_ {
        self.selected_types.iter().copied()
    }

    pub fn salary_floor(&self) -> Option<SalaryRange> {
        self.salary_floor
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn query(&self) -> JobsQuery {
        JobsQuery {
            employment_types: self.selected_types.iter().copied().collect(),
            minimum_package: self.salary_floor,
            search: self.search_text.clone(),
        }
    }
}

/// A composed `/jobs` request, detached from the filter state that built it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsQuery {
    pub employment_types: Vec<EmploymentType>,
    pub minimum_package: Option<SalaryRange>,
    pub search: String,
}

impl JobsQuery {
    /// Renders the query string. All three keys are always present and in a
    /// fixed order, empty values included.
    pub fn to_query_string(&self) -> String {
        let types = self
            .employment_types
            .iter()
            .map(|kind| kind.id())
            .collect::<Vec<_>>()
            .join(",");
        let package = self.minimum_package.map(SalaryRange::id).unwrap_or("");
        format!(
            "employment_type={}&minimum_package={}&search={}",
            types,
            package,
            encode(&self.search)
        )
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
