/// A page region that owns one background canvas and one dot population.
///
/// Variants are declared in page order; grids are stacked in this order when
/// computing each dot's vertical offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Github,
    Projects,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Github,
        Section::Projects,
        Section::Contact,
        Section::Footer,
    ];

    /// CSS selector of the section element whose height sizes the canvas.
    pub fn selector(self) -> &'static str {
        match self {
            Section::Hero => ".hero",
            Section::About => ".about",
            Section::Skills => ".skills",
            Section::Github => ".github-stats",
            Section::Projects => ".projects",
            Section::Contact => ".contact",
            Section::Footer => ".footer",
        }
    }

    /// Element id of the section's background canvas.
    pub fn canvas_id(self) -> &'static str {
        match self {
            Section::Hero => "dotCanvas",
            Section::About => "aboutDotCanvas",
            Section::Skills => "skillsDotCanvas",
            Section::Github => "githubDotCanvas",
            Section::Projects => "projectsDotCanvas",
            Section::Contact => "contactDotCanvas",
            Section::Footer => "footerDotCanvas",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Github => "github",
            Section::Projects => "projects",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }
}
