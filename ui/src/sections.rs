// In-page scroll targets. There is no router, every link is an anchor.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    About,
    Skills,
    Contact,
}

impl Section {
    /// Sections linked from the nav bar, mobile panel and footer, in order.
    pub const NAV: [Section; 4] = [
        Section::Projects,
        Section::About,
        Section::Skills,
        Section::Contact,
    ];

    /// `(id, anchor, label)`
    fn names(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Section::Home => ("home", "#home", "Home"),
            Section::Projects => ("projects", "#projects", "Projects"),
            Section::About => ("about", "#about", "About"),
            Section::Skills => ("skills", "#skills", "Skills"),
            Section::Contact => ("contact", "#contact", "Contact"),
        }
    }

    pub fn id(&self) -> &'static str {
        self.names().0
    }

    pub fn anchor(&self) -> &'static str {
        self.names().1
    }

    pub fn label(&self) -> &'static str {
        self.names().2
    }
}
