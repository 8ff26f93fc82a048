use serde::Serialize;
use utoipa::ToSchema;

use crate::features::site::models::{
    category_tone, Activity, Album, ClubValue, ContactChannel, MembershipFee, OfficeHours,
    PastEvent, Profile, SocialLink, Stat, UpcomingEvent, ABOUT_INTRO, ACTIVITIES, ALBUMS,
    CLUB_NAME, CLUB_TAGLINE, CLUB_VALUES, CONTACT_CHANNELS, HISTORY, JOIN_BENEFITS,
    MEMBERSHIP_FEE, MISSION, OFFICE_HOURS, PAST_EVENTS, PRESIDENT, SOCIAL_LINKS, STATS,
    UPCOMING_EVENTS, VISION,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponseDto {
    pub title: &'static str,
    pub tagline: &'static str,
    pub stats: &'static [Stat],
    pub activities: &'static [Activity],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AboutResponseDto {
    pub intro: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    pub values: &'static [ClubValue],
    pub history: &'static [&'static str],
    pub president: Profile,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventsResponseDto {
    pub upcoming: &'static [UpcomingEvent],
    pub past: &'static [PastEvent],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumDto {
    pub index: usize,
    #[serde(flatten)]
    pub album: Album,
    pub tone: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseDto {
    pub channels: &'static [ContactChannel],
    pub socials: &'static [SocialLink],
    pub office_hours: &'static [OfficeHours],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JoinResponseDto {
    pub benefits: &'static [&'static str],
    pub fee: MembershipFee,
    pub activities: &'static [Activity],
}

impl HomeResponseDto {
    pub fn load() -> Self {
        Self {
            title: CLUB_NAME,
            tagline: CLUB_TAGLINE,
            stats: STATS,
            activities: ACTIVITIES,
        }
    }
}

impl AboutResponseDto {
    pub fn load() -> Self {
        Self {
            intro: ABOUT_INTRO,
            mission: MISSION,
            vision: VISION,
            values: CLUB_VALUES,
            history: HISTORY,
            president: PRESIDENT,
        }
    }
}

impl EventsResponseDto {
    pub fn load() -> Self {
        Self {
            upcoming: UPCOMING_EVENTS,
            past: PAST_EVENTS,
        }
    }
}

impl AlbumDto {
    pub fn all() -> Vec<Self> {
        ALBUMS
            .iter()
            .enumerate()
            .map(|(index, album)| Self::new(index, *album))
            .collect()
    }

    pub fn new(index: usize, album: Album) -> Self {
        Self {
            index,
            tone: category_tone(album.category),
            album,
        }
    }
}

impl ContactResponseDto {
    pub fn load() -> Self {
        Self {
            channels: CONTACT_CHANNELS,
            socials: SOCIAL_LINKS,
            office_hours: OFFICE_HOURS,
        }
    }
}

impl JoinResponseDto {
    pub fn load() -> Self {
        Self {
            benefits: JOIN_BENEFITS,
            fee: MEMBERSHIP_FEE,
            activities: ACTIVITIES,
        }
    }
}
