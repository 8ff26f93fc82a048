use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::forms::validator::{FieldRules, FormSchema};
use crate::features::notifications::Notification;
use crate::shared::constants::ACTIVITY_IDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Contact,
    Join,
    SignIn,
    SignUp,
}

lazy_static! {
    static ref CONTACT_SCHEMA: FormSchema = FormSchema::new("contact")
        .field(
            FieldRules::text("name")
                .min_length(2, "Le nom doit contenir au moins 2 caractères")
                .max_length(100, "Le nom ne doit pas dépasser 100 caractères"),
        )
        .field(
            FieldRules::text("email")
                .email("Email invalide")
                .max_length(255, "L'email ne doit pas dépasser 255 caractères"),
        )
        .field(
            FieldRules::text("subject")
                .min_length(5, "Le sujet doit contenir au moins 5 caractères")
                .max_length(200, "Le sujet ne doit pas dépasser 200 caractères"),
        )
        .field(
            FieldRules::text("message")
                .min_length(10, "Le message doit contenir au moins 10 caractères")
                .max_length(1000, "Le message ne doit pas dépasser 1000 caractères"),
        );

    static ref JOIN_SCHEMA: FormSchema = FormSchema::new("join")
        .field(
            FieldRules::text("fullName")
                .min_length(2, "Le nom complet doit contenir au moins 2 caractères")
                .max_length(100, "Le nom complet ne doit pas dépasser 100 caractères"),
        )
        .field(
            FieldRules::text("codeMassar")
                .required("Le code massar est requis")
                .max_length(50, "Le code massar ne doit pas dépasser 50 caractères"),
        )
        .field(
            FieldRules::secret("password")
                .min_length(6, "Le mot de passe doit contenir au moins 6 caractères")
                .max_length(72, "Le mot de passe ne doit pas dépasser 72 caractères"),
        )
        .field(
            FieldRules::text("phone")
                .min_length(10, "Numéro de téléphone invalide")
                .max_length(20, "Numéro de téléphone invalide")
                .phone("Numéro de téléphone invalide"),
        )
        .field(
            FieldRules::selection("activities")
                .non_empty("Sélectionnez au moins une activité")
                .one_of(ACTIVITY_IDS, "Activité inconnue"),
        );

    static ref SIGN_IN_SCHEMA: FormSchema = FormSchema::new("signin")
        .field(
            FieldRules::text("fullName")
                .min_length(2, "Le nom complet doit contenir au moins 2 caractères")
                .max_length(200, "Le nom complet ne doit pas dépasser 200 caractères"),
        )
        .field(
            FieldRules::text("email")
                .email("Email invalide")
                .max_length(255, "L'email ne doit pas dépasser 255 caractères"),
        )
        .field(
            FieldRules::secret("password")
                .min_length(6, "Le mot de passe doit contenir au moins 6 caractères")
                .max_length(72, "Le mot de passe ne doit pas dépasser 72 caractères"),
        );

    static ref SIGN_UP_SCHEMA: FormSchema = FormSchema::new("signup")
        .field(
            FieldRules::text("nom")
                .min_length(2, "Le nom doit contenir au moins 2 caractères")
                .max_length(100, "Le nom ne doit pas dépasser 100 caractères"),
        )
        .field(
            FieldRules::text("prenom")
                .min_length(2, "Le prénom doit contenir au moins 2 caractères")
                .max_length(100, "Le prénom ne doit pas dépasser 100 caractères"),
        )
        .field(
            FieldRules::text("codeMassar")
                .required("Le code massar est requis")
                .max_length(50, "Le code massar ne doit pas dépasser 50 caractères"),
        )
        .field(
            FieldRules::text("email")
                .email("Email invalide")
                .max_length(255, "L'email ne doit pas dépasser 255 caractères"),
        )
        .field(
            FieldRules::secret("password")
                .min_length(6, "Le mot de passe doit contenir au moins 6 caractères")
                .max_length(72, "Le mot de passe ne doit pas dépasser 72 caractères"),
        );
}

impl FormKind {
    pub fn schema(&self) -> &'static FormSchema {
        match self {
            FormKind::Contact => &CONTACT_SCHEMA,
            FormKind::Join => &JOIN_SCHEMA,
            FormKind::SignIn => &SIGN_IN_SCHEMA,
            FormKind::SignUp => &SIGN_UP_SCHEMA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.schema().name
    }

    /// Notification shown once the payload was accepted and delivered
    pub fn success_notification(&self) -> Notification {
        match self {
            FormKind::Contact => Notification::info(
                "Message envoyé !",
                "Nous vous répondrons dans les plus brefs délais.",
            ),
            FormKind::Join => Notification::info(
                "Inscription envoyée !",
                "Nous vous contacterons bientôt pour finaliser votre inscription.",
            ),
            FormKind::SignIn => Notification::info("Connexion réussie", "Bienvenue au club !"),
            FormKind::SignUp => Notification::info(
                "Compte créé",
                "Votre compte a été créé avec succès.",
            ),
        }
    }

    /// Notification shown when the receiving backend is still a placeholder
    pub fn not_implemented_notification(&self) -> Notification {
        let description = match self {
            FormKind::Contact => "L'envoi de messages n'est pas encore disponible",
            FormKind::Join => "Les candidatures ne sont pas encore traitées",
            FormKind::SignIn => "La connexion n'est pas encore disponible",
            FormKind::SignUp => "L'inscription n'est pas encore disponible",
        };
        Notification::info("Bientôt disponible", description)
    }
}
