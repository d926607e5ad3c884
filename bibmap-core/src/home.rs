/// A teaser card on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeCard {
    pub kicker: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A titled row of cards on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeSection {
    pub title: &'static str,
    pub cards: &'static [HomeCard],
}

const fn card(kicker: &'static str, title: &'static str, desc: &'static str) -> HomeCard {
    HomeCard {
        kicker,
        title,
        desc,
    }
}

const EXPLAINERS: &[HomeCard] = &[
    card("EXPLAINER", "Why Bethlehem mattered", "A geography-first look at the Christmas claim."),
    card("EXPLAINER", "Nazareth: small town, big implication", "What the setting tells us about the story."),
    card("EXPLAINER", "Rome's census question", "What we know, what we don't, and why it matters."),
];

const MAPS: &[HomeCard] = &[
    card("MAP", "Judea under Rome", "Borders, roads, and political pressure points."),
    card("MAP", "From Nazareth to Bethlehem", "Distance, terrain, and the route options."),
    card("MAP", "Herodian kingdoms", "Who ruled what, and when."),
];

const HISTORY: &[HomeCard] = &[
    card("HISTORY", "Herod in context", "Sources, reputation, and the timeline."),
    card("HISTORY", "Temple politics", "Why Jerusalem was always tense."),
    card("HISTORY", "Roman provincial control", "How empire governance worked on the ground."),
];

const PEOPLE: &[HomeCard] = &[
    card("PERSON", "Mary", "What the texts emphasize, and what's later tradition."),
    card("PERSON", "Joseph", "The quiet backbone of the narrative."),
    card("PERSON", "The Magi", "Who they might have been (and who they weren't)."),
];

const SECTIONS: &[HomeSection] = &[
    HomeSection { title: "Explainers", cards: EXPLAINERS },
    HomeSection { title: "Maps", cards: MAPS },
    HomeSection { title: "History", cards: HISTORY },
    HomeSection { title: "People", cards: PEOPLE },
];

/// Placeholder content shown on the home page until real articles exist.
pub fn home_sections() -> &'static [HomeSection] {
    SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_sections_of_three_cards() {
        let sections = home_sections();
        assert_eq!(sections.len(), 4);
        assert!(sections.iter().all(|s| s.cards.len() == 3));
    }

    #[test]
    fn test_kickers_match_sections() {
        let people = &home_sections()[3];
        assert_eq!(people.title, "People");
        assert!(people.cards.iter().all(|c| c.kicker == "PERSON"));
    }
}
