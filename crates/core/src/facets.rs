//! Facet vocabulary — the one table both the filter panel and the edit form read.
//!
//! Choice values must match what the backend accepts exactly. A value the backend
//! does not know is not an error anywhere: the filter just matches nothing, or the
//! edit is stored as-is. Keep these lists in lockstep with the backend.

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// A selectable value: what goes on the wire, and what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn same(value: &'static str) -> Choice {
    Choice { value, label: value }
}

pub const LANGUAGES: &[Choice] = &[same("English"), same("German"), same("Serbian")];

pub const CLIENT_SPECIFIC: &[Choice] = &[
    Choice { value: "True", label: "Yes" },
    Choice { value: "False", label: "No" },
];

pub const PURPOSES: &[Choice] = &[
    same("Value Delivery"),
    same("Service QA"),
    same("Employee Development"),
    same("PR & Marketing"),
    same("Sales & Business Development"),
    same("Project Management"),
];

pub const ARTIFACT_TYPES: &[Choice] = &[
    same("Analysis and Recommendations"),
    same("Implementation Materials"),
    same("Solution Adoption Materials"),
    same("Process Documentation"),
    same("Templates and Tools"),
    same("References"),
    same("Client Requests"),
    same("Sales Proposals"),
    same("Thought Leadership Content"),
    same("Marketing Materials"),
    same("Project Documentation"),
    same("Client Onboarding Materials"),
    same("Publications"),
    same("Training Materials"),
    same("Other Development Materials"),
    same("Other Project Materials"),
    same("Other PR & Marketing Materials"),
    same("Other Sales Materials"),
    same("Other Quality Materials"),
];

pub const INDUSTRIES: &[Choice] = &[
    same("Accommodation Services"),
    same("Administrative and Support Services"),
    same("Construction"),
    same("Consumer Services"),
    same("Education"),
    same("Entertainment Providers"),
    same("Farming, Ranching, Forestry"),
    same("Financial Services"),
    same("Government Administration"),
    same("Holding Companies"),
    same("Hospitals and Health Care"),
    same("Manufacturing"),
    same("Oil, Gas, and Mining"),
    same("Professional Services"),
    same("Real Estate and Equipment Rental Services"),
    same("Retail"),
    same("Technology, Information and Media"),
    same("Transportation, Logistics, Supply Chain and Storage"),
    same("Utilities"),
    same("Wholesale"),
    same("Not Specified"),
];

/// How a facet is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetInput {
    /// One of a fixed list.
    Choice(&'static [Choice]),
    /// Free text.
    Text { placeholder: &'static str },
    /// A `YYYY-MM` month.
    Month,
}

impl FacetInput {
    /// Whether `value` is acceptable for this input. Free-text and month inputs
    /// take anything; the backend owns their validation.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FacetInput::Choice(choices) => choices.iter().any(|c| c.value == value),
            FacetInput::Text { .. } | FacetInput::Month => true,
        }
    }

    /// Display label for a stored value. Unknown values show verbatim.
    pub fn label_for<'a>(&self, value: &'a str) -> &'a str {
        match self {
            FacetInput::Choice(choices) => {
                choices.iter().find(|c| c.value == value).map(|c| c.label).unwrap_or(value)
            }
            _ => value,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter facets
// ---------------------------------------------------------------------------

/// The eight filterable facets, in filter-panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Language,
    BusinessDate,
    ClientSpecific,
    ClientName,
    Purpose,
    ArtifactType,
    Topic,
    Industry,
}

impl Facet {
    pub const ALL: [Facet; 8] = [
        Facet::Language,
        Facet::BusinessDate,
        Facet::ClientSpecific,
        Facet::ClientName,
        Facet::Purpose,
        Facet::ArtifactType,
        Facet::Topic,
        Facet::Industry,
    ];

    /// Metadata / wire key.
    pub fn key(self) -> &'static str {
        match self {
            Facet::Language => "language",
            Facet::BusinessDate => "business_date",
            Facet::ClientSpecific => "is_client_specific",
            Facet::ClientName => "client_name",
            Facet::Purpose => "purpose",
            Facet::ArtifactType => "artifact_type",
            Facet::Topic => "topic",
            Facet::Industry => "industry",
        }
    }

    pub fn from_key(key: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Label in the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            Facet::Language => "Language",
            Facet::BusinessDate => "Business Date",
            Facet::ClientSpecific => "Client Specific",
            Facet::ClientName => "Client Name",
            Facet::Purpose => "Purpose",
            Facet::ArtifactType => "Artifact Type",
            Facet::Topic => "Topic",
            Facet::Industry => "Industry",
        }
    }

    /// Placeholder shown while a choice facet is unset.
    pub fn placeholder(self) -> &'static str {
        match self {
            Facet::Language => "Select language",
            Facet::ClientSpecific => "Select option",
            Facet::Purpose => "Select purpose",
            Facet::ArtifactType => "Select type",
            Facet::Industry => "Select industry",
            Facet::ClientName => "Enter client name",
            Facet::Topic => "Enter topic",
            Facet::BusinessDate => "YYYY-MM",
        }
    }

    pub fn input(self) -> FacetInput {
        match self {
            Facet::Language => FacetInput::Choice(LANGUAGES),
            Facet::BusinessDate => FacetInput::Month,
            Facet::ClientSpecific => FacetInput::Choice(CLIENT_SPECIFIC),
            Facet::ClientName => FacetInput::Text { placeholder: "Enter client name" },
            Facet::Purpose => FacetInput::Choice(PURPOSES),
            Facet::ArtifactType => FacetInput::Choice(ARTIFACT_TYPES),
            Facet::Topic => FacetInput::Text { placeholder: "Enter topic" },
            Facet::Industry => FacetInput::Choice(INDUSTRIES),
        }
    }

    pub fn accepts(self, value: &str) -> bool {
        self.input().accepts(value)
    }
}

// ---------------------------------------------------------------------------
// Edit form fields
// ---------------------------------------------------------------------------

/// A field in the inline edit form: a metadata key, a short card label, and the
/// input it uses. Facet-backed fields reuse the facet's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditField {
    pub key: &'static str,
    pub label: &'static str,
    pub input: FacetInput,
}

/// Metadata key of the free-text comment field.
pub const COMMENT_KEY: &str = "comment";

/// Fields shown on a result card, in display order.
pub fn edit_fields() -> [EditField; 9] {
    let facet = |facet: Facet, label: &'static str| EditField { key: facet.key(), label, input: facet.input() };
    [
        facet(Facet::ClientName, "Client"),
        facet(Facet::Purpose, "Purpose"),
        facet(Facet::ArtifactType, "Type"),
        facet(Facet::BusinessDate, "Date"),
        facet(Facet::Language, "Language"),
        facet(Facet::Industry, "Industry"),
        facet(Facet::Topic, "Topic"),
        facet(Facet::ClientSpecific, "Client Specific"),
        EditField {
            key: COMMENT_KEY,
            label: "Comment",
            input: FacetInput::Text { placeholder: "Add a comment..." },
        },
    ]
}

/// Find an edit field by metadata key.
pub fn edit_field(key: &str) -> Option<EditField> {
    edit_fields().into_iter().find(|f| f.key == key)
}
