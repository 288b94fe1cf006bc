/// Prefix shared by every data route
pub const API_PREFIX: &str = "/api/v1";

/// Default page size for `/communes` pagination
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Maximum page size allowed
pub const MAX_PAGE_LIMIT: i64 = 200;

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MSG_SUCCESS: &str = "Succès";

pub const MSG_STATS: &str = "Statistiques globales du découpage administratif du Sénégal";

pub const MSG_RESOURCE_NOT_FOUND: &str = "Ressource non trouvée.";

pub const MSG_ROUTE_NOT_FOUND: &str = "Route non trouvée.";

pub const MSG_INTERNAL_ERROR: &str = "Une erreur interne est survenue.";

pub const MSG_SEARCH_TERM: &str =
    "Le paramètre 'q' est requis et doit contenir au moins 2 caractères.";

pub const MSG_INVALID_QUERY: &str = "Paramètres de requête invalides.";

pub const MSG_INVALID_PATH: &str = "Paramètre de chemin invalide.";

pub const MSG_SEARCH_TYPE: &str =
    "Le paramètre 'type' doit valoir 'region', 'departement' ou 'commune'.";

pub const MSG_WELCOME: &str = "Bienvenue dans l'API du Découpage administratif du Sénégal. \
Cette API expose les 14 Régions et 46 Départements du pays, ainsi qu'un échantillon de \
Communes, pour faciliter l'intégration dans vos applications. Documentation : /docs";
