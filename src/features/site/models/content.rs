//! Hard-coded site content.

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::constants::{ACTIVITY_CHESS, ACTIVITY_INNOVATION, ACTIVITY_ROBOTICS};

pub const CLUB_NAME: &str = "Club Scientifique et Technologique";
pub const CLUB_TAGLINE: &str =
    "Stimuler la créativité et l'innovation chez les jeunes esprits à travers la science, la technologie et la compétition intellectuelle.";

/// Placeholder text for details the club has not published yet
pub const COMING_SOON: &str = "coming soon";

pub const CATEGORY_CHESS: &str = "Échecs";
pub const CATEGORY_INNOVATION: &str = "Prix du meilleur TIPE";
pub const CATEGORY_ROBOTICS: &str = "Robotique";

/// Badge tone for an activity category
pub fn category_tone(category: &str) -> &'static str {
    match category {
        CATEGORY_CHESS => "primary",
        CATEGORY_INNOVATION => "accent",
        CATEGORY_ROBOTICS => "primary-glow",
        _ => "primary",
    }
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Activity {
    /// Identifier used by the membership form
    pub id: &'static str,
    pub title: &'static str,
    /// Short description shown on the home page
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub precious: &'static str,
    pub partners: &'static str,
    pub schedule: &'static str,
    pub members: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct UpcomingEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub category: &'static str,
    pub participants: &'static str,
    pub description: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct PastEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub participants: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Album {
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub photos: usize,
    pub cover: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct SocialLink {
    pub label: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ClubValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub initials: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct MembershipFee {
    pub amount: &'static str,
    pub note: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "150+",
        label: "Membres Actifs",
    },
    Stat {
        value: "25+",
        label: "Prix Remportés",
    },
    Stat {
        value: "50+",
        label: "Projets Réalisés",
    },
];

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        id: ACTIVITY_ROBOTICS,
        title: CATEGORY_ROBOTICS,
        summary: "Construisez et programmez des robots pour participer à des compétitions nationales.",
        description: "Construisez, programmez et pilotez des robots pour participer à des compétitions nationales et internationales.",
        features: &[
            "Ateliers de formations",
            "Ateliers de suivre",
            "Des compétition locale, nationale ou même internationale",
        ],
        precious: COMING_SOON,
        partners: COMING_SOON,
        schedule: COMING_SOON,
        members: COMING_SOON,
        image: "robotics",
    },
    Activity {
        id: ACTIVITY_CHESS,
        title: "Échecs & Rubik's Cube",
        summary: "Développez votre stratégie et logique à travers des tournois et sessions d'entraînement.",
        description: "Développez vos capacités de réflexion stratégique et de résolution de problèmes à travers les échecs et le Rubik's cube.",
        features: &[
            "Ateliers de formations",
            "Ateliers de suivre",
            "Ateliers pour jouer",
            "Des compétition locale, nationale ou même internationale",
        ],
        precious: COMING_SOON,
        partners: COMING_SOON,
        schedule: COMING_SOON,
        members: COMING_SOON,
        image: "chess",
    },
    Activity {
        id: ACTIVITY_INNOVATION,
        title: CATEGORY_INNOVATION,
        summary: "Participez à la compétition du meilleur TIPE et présentez vos travaux de recherche scientifique.",
        description: "Participez à la compétition du meilleur TIPE et présentez vos travaux de recherche scientifique devant un jury d'experts.",
        features: &[
            "Accompagnement dans la réalisation du TIPE",
            "Sessions de préparation à la présentation orale",
            "Accès aux équipements de recherche",
            "Récompenses et reconnaissances académiques",
        ],
        precious: COMING_SOON,
        partners: COMING_SOON,
        schedule: COMING_SOON,
        members: COMING_SOON,
        image: "innovation",
    },
];

pub const UPCOMING_EVENTS: &[UpcomingEvent] = &[
    UpcomingEvent {
        title: "Tournoi d'Échecs Inter-Clubs",
        date: "15 Avril 2024",
        time: "14h00 - 18h00",
        location: "Salle A - Campus Principal",
        category: CATEGORY_CHESS,
        participants: "30/40",
        description: "Grande compétition d'échecs ouverte à tous les niveaux. Prix pour les trois premiers.",
        status: "Inscriptions ouvertes",
    },
    UpcomingEvent {
        title: "Hackathon Innovation 48h",
        date: "20-22 Avril 2024",
        time: "Vendredi 18h - Dimanche 18h",
        location: "Espace Innovation",
        category: CATEGORY_INNOVATION,
        participants: "45/50",
        description: "Développez un projet innovant en 48 heures. Mentorat, pizza et prix garantis !",
        status: "Places limitées",
    },
    UpcomingEvent {
        title: "Compétition Robotique Régionale",
        date: "5 Mai 2024",
        time: "09h00 - 17h00",
        location: "Centre des Congrès",
        category: CATEGORY_ROBOTICS,
        participants: "12/15 équipes",
        description: "Qualifier pour la compétition nationale. Défi: Robot autonome de navigation.",
        status: "Inscriptions ouvertes",
    },
    UpcomingEvent {
        title: "Atelier Résolution Rubik's Cube",
        date: "25 Avril 2024",
        time: "16h00 - 18h00",
        location: "Salle B - Campus Principal",
        category: CATEGORY_CHESS,
        participants: "18/25",
        description: "Apprenez les techniques de speed-solving avec nos champions du club.",
        status: "Inscriptions ouvertes",
    },
];

pub const PAST_EVENTS: &[PastEvent] = &[
    PastEvent {
        title: "Workshop Arduino pour Débutants",
        date: "10 Mars 2024",
        category: CATEGORY_ROBOTICS,
        participants: "22 participants",
    },
    PastEvent {
        title: "Expo Projets Innovation",
        date: "5 Mars 2024",
        category: CATEGORY_INNOVATION,
        participants: "15 projets présentés",
    },
    PastEvent {
        title: "Tournoi Blitz d'Échecs",
        date: "28 Février 2024",
        category: CATEGORY_CHESS,
        participants: "35 participants",
    },
];

pub const ALBUMS: &[Album] = &[
    Album {
        title: "Tournoi d'Échecs 2024",
        category: CATEGORY_CHESS,
        date: "Mars 2024",
        photos: 12,
        cover: "chess",
    },
    Album {
        title: "Hackathon Innovation",
        category: CATEGORY_INNOVATION,
        date: "Février 2024",
        photos: 15,
        cover: "innovation",
    },
    Album {
        title: "Compétition de Robotique",
        category: CATEGORY_ROBOTICS,
        date: "Janvier 2024",
        photos: 18,
        cover: "robotics",
    },
    Album {
        title: "Workshop Rubik's Cube",
        category: CATEGORY_CHESS,
        date: "Décembre 2023",
        photos: 8,
        cover: "chess",
    },
    Album {
        title: "Expo Projets Innovants",
        category: CATEGORY_INNOVATION,
        date: "Novembre 2023",
        photos: 14,
        cover: "innovation",
    },
    Album {
        title: "Formation Robotique Débutants",
        category: CATEGORY_ROBOTICS,
        date: "Octobre 2023",
        photos: 10,
        cover: "robotics",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "club.scientifique.tech@gmail.com",
        link: "mailto:club.scientifique.tech@gmail.com",
    },
    ContactChannel {
        label: "Téléphone",
        value: "+212 619-099651",
        link: "tel:+212619099651",
    },
    ContactChannel {
        label: "Adresse",
        value: "Lycée Ibn Timiya - Salle de conférence",
        link: "#",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        link: "#",
    },
    SocialLink {
        label: "Instagram",
        link: "#",
    },
    SocialLink {
        label: "LinkedIn",
        link: "#",
    },
];

pub const OFFICE_HOURS: &[OfficeHours] = &[
    OfficeHours {
        days: "Lundi - Vendredi",
        hours: "14h - 20h",
    },
    OfficeHours {
        days: "Samedi",
        hours: "10h - 18h",
    },
    OfficeHours {
        days: "Dimanche",
        hours: "Fermé",
    },
];

pub const CLUB_VALUES: &[ClubValue] = &[
    ClubValue {
        title: "Excellence",
        description: "Nous visons l'excellence dans chaque projet et compétition.",
    },
    ClubValue {
        title: "Passion",
        description: "La passion pour la science et la technologie nous anime.",
    },
    ClubValue {
        title: "Collaboration",
        description: "L'esprit d'équipe et le partage de connaissances sont essentiels.",
    },
    ClubValue {
        title: "Innovation",
        description: "Nous encourageons la créativité et la pensée innovante.",
    },
];

pub const PRESIDENT: Profile = Profile {
    name: "Ihabe Farahat Sherif",
    role: "Economics & Business CPGE Student | Initiative-Taker & Impact-Maker",
    bio: "Helping Solve Real-World Business Challenges through Innovation & Purposeful Leadership.",
    initials: "IF",
    image: "president",
};

pub const ABOUT_INTRO: &str = "Le Club Scientifique et Technologique est une communauté dynamique dédiée à l'épanouissement des talents scientifiques et techniques des jeunes.";

pub const MISSION: &str = "Développer les compétences scientifiques et technologiques des jeunes à travers des activités pratiques, des compétitions stimulantes et des projets innovants. Nous créons un environnement propice à l'apprentissage, à la créativité et à l'excellence.";

pub const VISION: &str = "Devenir le club scientifique de référence en formant la prochaine génération d'innovateurs, de penseurs critiques et de leaders technologiques. Nous aspirons à créer un impact durable sur nos membres et la communauté scientifique.";

pub const HISTORY: &[&str] = &[
    "Fondé en [année], le Club Scientifique et Technologique est né de la passion d'un groupe d'étudiants pour la science, la technologie et l'innovation. Depuis nos débuts modestes, nous avons grandi pour devenir l'une des organisations étudiantes les plus actives.",
    "Au fil des années, nos membres ont remporté de nombreux prix dans des compétitions nationales et internationales, développé des projets innovants qui ont eu un impact réel, et créé une communauté soudée de passionnés de science et technologie.",
    "Aujourd'hui, nous continuons à innover, à apprendre et à grandir ensemble, en préparant nos membres à devenir les leaders technologiques de demain.",
];

pub const JOIN_BENEFITS: &[&str] = &[
    "Accès à tous les ateliers et équipements du club",
    "Participation aux compétitions nationales et internationales",
    "Mentorat par des membres expérimentés",
    "Networking avec d'autres passionnés",
    "Certificats de participation et de réussite",
    "Accès prioritaire aux événements spéciaux",
];

pub const MEMBERSHIP_FEE: MembershipFee = MembershipFee {
    amount: "XXX DH/an",
    note: "Accès illimité à toutes les activités",
};

pub fn activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

pub fn album(index: usize) -> Option<&'static Album> {
    ALBUMS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ACTIVITY_IDS;

    #[test]
    fn test_every_activity_id_has_content() {
        for id in ACTIVITY_IDS {
            assert!(activity(id).is_some(), "missing activity {}", id);
        }
        assert_eq!(ACTIVITIES.len(), ACTIVITY_IDS.len());
    }

    #[test]
    fn test_category_tone() {
        assert_eq!(category_tone(CATEGORY_CHESS), "primary");
        assert_eq!(category_tone(CATEGORY_INNOVATION), "accent");
        assert_eq!(category_tone(CATEGORY_ROBOTICS), "primary-glow");
        assert_eq!(category_tone("Autre"), "primary");
    }

    #[test]
    fn test_album_lookup() {
        assert_eq!(album(2).map(|a| a.photos), Some(18));
        assert!(album(ALBUMS.len()).is_none());
    }
}
