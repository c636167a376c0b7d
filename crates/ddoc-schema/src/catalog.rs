//! # Perimeter 1 Catalog
//!
//! Doctypes and field definitions of perimeter 1, from the ANTS 2D-Doc
//! barcode technical documentation (v3.1.3). Labels are in French, as
//! published.

use crate::codec::FieldCodec::{self, *};
use crate::codec::TextFormat;
use crate::definition::{doctype, field, Doctype, FieldDefinition, Group};

const TEXT: FieldCodec = Text(TextFormat::Any);
const AZ: FieldCodec = Text(TextFormat::Az);
const AZ09: FieldCodec = Text(TextFormat::Az09);
const AZ_SP: FieldCodec = Text(TextFormat::AzSp);
const AZ09_SP: FieldCodec = Text(TextFormat::Az09Sp);
const AZ09_SP_SL: FieldCodec = Text(TextFormat::Az09SpSl);
const AZ_SP_SL: FieldCodec = Text(TextFormat::AzSpSl);
const AZ09_DASH: FieldCodec = Text(TextFormat::Az09Dash);
const AZ09_DASH_SL: FieldCodec = Text(TextFormat::Az09DashSl);
const AZ09_SP_AT_DASH: FieldCodec = Text(TextFormat::Az09SpAtDash);
const NUMERIC: FieldCodec = Text(TextFormat::Numeric);
const NUMERIC0: FieldCodec = Text(TextFormat::NumericPadded);
const NUMERIC_SP: FieldCodec = Text(TextFormat::NumericSp);
const NUMERIC_SL: FieldCodec = Text(TextFormat::NumericSl);
const HEX: FieldCodec = Text(TextFormat::Hex);
const DECIMAL: FieldCodec = Text(TextFormat::Decimal);
const PHONE: FieldCodec = Text(TextFormat::Phone);
const DATE4: FieldCodec = Date4;
const BOOLEAN: FieldCodec = Boolean;
const DAY_MONTH_YEAR: FieldCodec = DayMonthYear;
const DATE_TIME: FieldCodec = DateTime;
const HEX_INT: FieldCodec = HexInt;
const TIME6: FieldCodec = Time6;
const HOUR_MINUTE: FieldCodec = HourMinute;
const BASE32: FieldCodec = Base32;
const BASE36: FieldCodec = Base36;

pub(crate) const PERIMETER_1_DOCTYPES: &[Doctype] = &[
    doctype("00", "Justificatif de domicile", "Spécifique"),
    doctype("01", "Justificatif de domicile", "Facture"),
    doctype("02", "Justificatif de domicile", "Avis TH"),
    doctype("03", "Justificatif de domiciliation bancaire", "RIB"),
    doctype("05", "Justificatif de domiciliation bancaire", "SEPAmail"),
    doctype("04", "Justificatif de ressources", "Avis IR"),
    doctype("06", "Justificatif de ressources", "Bulletin de salaire"),
    doctype("11", "Justificatif de ressources", "Relevé de compte"),
    doctype("07", "Justificatif d'identité", "Titre d'identité"),
    doctype("08", "Justificatif d'identité", "MRZ"),
    doctype("13", "Justificatif d'identité", "Document étranger"),
    doctype("09", "Justificatif fiscal", "Facture étendue"),
    doctype("10", "Justificatif d'emploi", "Contrat de travail"),
    doctype("15", "Justificatif d'emploi", "Attestation de décision favorable d'une demande d'autorisation de travail"),
    doctype("A0", "Justificatif de véhicule", "Certificat de qualité de l'air"),
    doctype("A7", "Justificatif de véhicule", "Certificat de qualité de l'air (V2)"),
    doctype("14", "Justificatif de véhicule", "Attestation DICEM"),
    doctype("A1", "Justificatif permis de conduire", "Courrier Permis à points"),
    doctype("A2", "Justificatif de santé", "Carte Mobilité Inclusion"),
    doctype("A3", "Justificatif d'activité", "Macaron VTC"),
    doctype("A5", "Justificatif d'activité", "Carte T3P"),
    doctype("A6", "Justificatif d'activité", "Carte Professionnelle Sapeur-Pompier"),
    doctype("A9", "Justificatif d'activité", "Permis de chasser"),
    doctype("A4", "Justificatif médical", "Certificat de décès"),
    doctype("B0", "Justificatif académique", "Diplôme"),
    doctype("B1", "Justificatif académique", "Attestation de Versement de la Contribution à la Vie Etudiante"),
    doctype("12", "Justificatif juridique/judiciaire", "Acte d'huissier"),
    doctype("A8", "Certificat d'immatriculation", "Certificat de session électronique"),
    doctype("C1", "Autorisations douanière", "Renseignement Tarifaire Contraignant"),
    doctype("C2", "Autorisations douanière", "Accord Préalable pour le transfert d'armes"),
    doctype("C3", "Autorisations douanière", "Permis de transfert d'armes à feu et de munitions"),
    doctype("C4", "Autorisations douanière", "Autorisation d'importation de matériels de guerre"),
    doctype("C5", "Autorisations douanière", "Licence d'exportation d'armes à feu"),
    doctype("C6", "Autorisations douanière", "Agrément de transfert d'armes à feu et de munitions"),
    doctype("B2", "Résultats des tests virologiques", "Test COVID"),
    doctype("L1", "Attestation Vaccinale", "Attestation Vaccinale"),
    doctype("16", "Justificatif d'Asile", "Attestation de Demande d'Asile"),
    doctype("17", "Justificatif d'Asile", "Attestation de fin de droit à l'allocation pour demandeur d'asile (ADA)"),
    doctype("L1", "Caducée Infirmier", "Caducée Infirmier"),
];

const SUPPLEMENTARY: &[FieldDefinition] = &[
    field("01", "Identifiant unique du document", 0, None, TEXT),
    field("02", "Catégorie de document", 0, None, TEXT),
    field("03", "Sous-catégorie de document", 0, None, TEXT),
    field("04", "Application de composition", 0, None, TEXT),
    field("05", "Version de l'application de composition", 0, None, TEXT),
    field("06", "Date de l'association entre le document et le code 2D-Doc", 4, Some(4), DATE4),
    field("07", "Heure de l'association entre le document et le code 2D-Doc", 6, Some(6), TIME6),
    field("08", "Date d'expiration du document", 4, Some(4), DATE4),
    field("09", "Nombre de pages du document", 4, Some(4), NUMERIC0),
    field("0A", "Editeur du 2D-Doc", 9, Some(9), NUMERIC0),
    field("0B", "Intégrateur du 2D-Doc", 9, Some(9), NUMERIC0),
    field("0C", "URL du document", 0, None, BASE32),
    field("0D", "UUID du document", 36, Some(36), HEX),
];

const INVOICE: &[FieldDefinition] = &[
    field("10", "Ligne 1 de la norme adresse postale du bénéficiaire de la prestation", 0, Some(38), AZ09_SP_SL),
    field("11", "Qualité et/ou titre de la personne bénéficiaire de la prestation", 0, Some(38), AZ_SP),
    field("12", "Prénom de la personne bénéficiaire de la prestation", 0, Some(38), AZ_SP),
    field("13", "Nom de la personne bénéficiaire de la prestation", 0, Some(38), AZ_SP),
    field("14", "Ligne 1 de la norme adresse postale du destinataire de la facture", 0, Some(38), AZ09_SP_SL),
    field("15", "Qualité et/ou titre de la personne destinataire de la facture", 0, Some(38), AZ_SP),
    field("16", "Prénom de la personne destinataire de la facture", 0, Some(38), AZ_SP),
    field("17", "Nom de la personne destinataire de la facture", 0, Some(38), AZ_SP),
    field("18", "Numéro de la facture", 0, None, AZ_SP),
    field("19", "Numéro de client", 0, None, AZ_SP),
    field("1A", "Numéro du contrat", 0, None, AZ_SP),
    field("1B", "Identifiant du souscripteur du contrat", 0, None, AZ_SP),
    field("1C", "Date d'effet du contrat", 8, Some(8), DAY_MONTH_YEAR),
    field("1D", "Montant TTC de la facture", 0, Some(16), DECIMAL),
    field("1E", "Numéro de téléphone du bénéficiaire de la prestation", 0, Some(30), PHONE),
    field("1F", "Numéro de téléphone du destinataire de la facture", 0, Some(30), PHONE),
    field("1G", "Présence d'un co-bénéficiaire de la prestation non mentionné dans le code", 1, Some(1), BOOLEAN),
    field("1H", "Présence d'un co-destinataire de la facture non mentionné dans le code", 1, Some(1), BOOLEAN),
    field("1I", "Ligne 1 de la norme adresse postale du co-bénéficiaire de la prestation", 0, Some(38), AZ09_SP_SL),
    field("1J", "Qualité et/ou titre du co-bénéficiaire de la prestation", 0, Some(38), AZ_SP),
    field("1K", "Prénom du co-bénéficiaire de la prestation", 0, Some(38), AZ_SP),
    field("1L", "Nom du co-bénéficiaire de la prestation", 0, Some(38), AZ_SP),
    field("1M", "Ligne 1 de la norme adresse postale du co-destinataire de la facture", 0, Some(38), AZ09_SP_SL),
    field("1N", "Qualité et/ou titre du co-destinataire de la facture", 0, Some(38), AZ_SP),
    field("1O", "Prénom du co-destinataire de la facture", 0, Some(38), AZ_SP),
    field("1P", "Nom du co-destinataire de la facture", 0, Some(38), AZ_SP),
    field("20", "Ligne 2 de la norme adresse postale du point de service des prestations", 0, Some(38), AZ09_SP),
    field("21", "Ligne 3 de la norme adresse postale du point de service des prestations", 0, Some(38), AZ09_SP),
    field("22", "Ligne 4 de la norme adresse postale du point de service des prestations", 0, Some(38), AZ09_SP),
    field("23", "Ligne 5 de la norme adresse postale du point de service des prestations", 0, Some(38), AZ09_SP),
    field("24", "Code postal ou code cedex du point de service des prestations", 5, Some(5), NUMERIC0),
    field("25", "Localité de destination ou libellé cedex du point de service des prestations", 0, Some(32), AZ_SP),
    field("26", "Pays de service des prestations", 2, Some(2), TEXT),
    field("27", "Ligne 2 de la norme adresse postale du destinataire de la facture", 0, Some(38), AZ09_SP),
    field("28", "Ligne 3 de la norme adresse postale du destinataire de la facture", 0, Some(38), AZ09_SP),
    field("29", "Ligne 4 de la norme adresse postale du destinataire de la facture", 0, Some(38), AZ09_SP),
    field("2A", "Ligne 5 de la norme adresse postale du destinataire de la facture", 0, Some(38), AZ09_SP),
    field("2B", "Code postal ou code cedex du destinataire de la facture", 5, Some(5), NUMERIC0),
    field("2C", "Localité de destination ou libellé cedex du destinataire de la facture", 0, Some(32), AZ_SP),
    field("2D", "Pays du destinataire de la facture", 2, Some(2), TEXT),
];

const BANKING: &[FieldDefinition] = &[
    field("30", "Qualité Nom et Prénom", 0, Some(140), AZ09_SP_SL),
    field("31", "Code IBAN", 14, Some(38), AZ09),
    field("32", "Code BIC/SWIFT", 8, Some(11), AZ09),
    field("33", "Code BBAN", 0, Some(30), AZ09),
    field("34", "Pays de localisation du compte", 2, Some(2), TEXT),
    field("35", "Identifiant SEPAmail (QXBAN)", 14, Some(34), AZ09),
    field("36", "Date de début de période", 4, Some(4), DATE4),
    field("37", "Date de fin de période", 4, Some(4), DATE4),
    field("38", "Solde compte début de période", 0, Some(11), DECIMAL),
    field("39", "Solde compte fin de période", 0, Some(11), DECIMAL),
];

const TAX: &[FieldDefinition] = &[
    field("40", "Numéro fiscal", 13, Some(13), NUMERIC0),
    field("41", "Revenu fiscal de référence", 0, Some(12), NUMERIC),
    field("42", "Situation du foyer", 0, None, AZ_SP),
    field("43", "Nombre de parts", 0, Some(5), DECIMAL),
    field("44", "Référence d'avis d'impôt", 13, Some(13), AZ09_SP),
    field("45", "Année des revenus", 4, Some(4), NUMERIC0),
    field("46", "Déclarant 1", 0, Some(38), AZ),
    field("47", "Numéro fiscal du déclarant 1", 13, Some(13), NUMERIC0),
    field("48", "Déclarant 2", 0, Some(38), AZ),
    field("49", "Numéro fiscal du déclarant 2", 13, Some(13), NUMERIC0),
    field("4A", "Date de mise en recouvrement", 8, Some(8), AZ),
    field("4B", "Date de la déclaration", 8, Some(8), DAY_MONTH_YEAR),
    field("4C", "Date d'enregistrement", 8, Some(8), DAY_MONTH_YEAR),
    field("4D", "Montant du don (en €)", 0, Some(12), NUMERIC),
    field("4E", "Montant des droits payés (en €)", 0, Some(12), NUMERIC),
    field("4F", "Référence d'enregistrement", 15, Some(15), AZ09),
    field("4G", "Nom du donataire", 0, Some(38), AZ09_DASH),
    field("4H", "Nom(s) du(es) donateur(s)", 0, Some(77), AZ09_SP_SL),
    field("4I", "Montant Taxable (en €)", 0, Some(12), NUMERIC),
    field("4J", "Montant de la cession (en €)", 0, Some(12), NUMERIC),
    field("4K", "Nom du cessionnaire", 0, Some(38), AZ09_SP_AT_DASH),
    field("4L", "Nom du cédant", 0, Some(38), AZ09_SP_AT_DASH),
    field("4M", "Taux applicable", 0, Some(3), DECIMAL),
    field("4N", "Nom et prénoms du déclarant", 0, Some(38), AZ_SP),
    field("4O", "Ligne 4 d'adresse du déclarant", 0, Some(38), AZ_SP),
    field("4P", "Code postal du déclarant", 5, Some(5), NUMERIC0),
    field("4Q", "Commune du déclarant", 0, Some(32), AZ_SP),
    field("4R", "SIP gestionnaire", 0, Some(30), AZ_SP),
    field("4S", "Millésime", 4, Some(4), NUMERIC0),
    field("4T", "Administration cantonale suisse", 0, Some(30), AZ_SP),
    field("4U", "Dénomination sociale de l'employeur", 0, Some(38), AZ09_SP),
];

const EMPLOYMENT: &[FieldDefinition] = &[
    field("50", "SIRET de l'employeur", 14, Some(14), NUMERIC0),
    field("51", "Nombre d'heures travaillées", 6, Some(6), DECIMAL),
    field("52", "Cumul du nombre d'heures travaillées", 7, Some(7), DECIMAL),
    field("53", "Début de période", 4, Some(4), DATE4),
    field("54", "Fin de période", 4, Some(4), DATE4),
    field("55", "Date de début de contrat", 8, Some(8), DAY_MONTH_YEAR),
    field("56", "Date de fin de contrat", 8, Some(8), DAY_MONTH_YEAR),
    field("57", "Date de signature du contrat", 8, Some(8), DAY_MONTH_YEAR),
    field("58", "Salaire net imposable", 0, Some(11), DECIMAL),
    field("59", "Cumul du salaire net imposable", 0, Some(12), DECIMAL),
    field("5A", "Salaire brut du mois", 0, Some(11), DECIMAL),
    field("5B", "Cumul du salaire brut", 0, Some(12), DECIMAL),
    field("5C", "Salaire net", 0, Some(11), DECIMAL),
    field("5D", "Ligne 2 de la norme adresse postale de l'employeur", 0, Some(38), AZ09_SP),
    field("5E", "Ligne 3 de la norme adresse postale de l'employeur", 0, Some(38), AZ09_SP),
    field("5F", "Ligne 4 de la norme adresse postale de l'employeur", 0, Some(38), AZ09_SP),
    field("5G", "Ligne 5 de la norme adresse postale de l'employeur", 0, Some(38), AZ09_SP),
    field("5H", "Code postal ou code cedex de l'employeur", 5, Some(5), NUMERIC0),
    field("5I", "Localité de destination ou libellé cedex de l'employeur", 0, Some(32), AZ_SP),
    field("5J", "Pays de l'employeur", 2, Some(2), TEXT),
    field("5K", "Identifiant Cotisant Prestations Sociales", 0, Some(50), AZ09_SP),
    field("5L", "Numéro de SIRET ou RNA", 9, Some(14), AZ09),
    field("5M", "Dénomination sociale", 0, Some(38), AZ09_SP),
    field("5N", "Numéro de dossier d'autorisation de travail", 21, Some(21), NUMERIC0),
    field("5O", "Nom de l'employeur", 0, Some(38), AZ_SP),
    field("5P", "Prénom de l'employeur", 0, Some(38), AZ_SP),
    field("5Q", "Nom du déclarant", 0, Some(38), AZ_SP),
    field("5R", "Prénom du déclarant", 0, Some(38), AZ_SP),
    field("5S", "Fonction du déclarant", 0, Some(40), AZ_SP),
    field("5T", "Type de contrat de travail", 1, Some(1), AZ),
    field("5U", "Durée du contrat", 0, Some(12), AZ09_SP),
];

const IDENTITY: &[FieldDefinition] = &[
    field("60", "Liste des prénoms", 0, Some(60), AZ_SP_SL),
    field("61", "Prénom", 0, Some(20), AZ_SP),
    field("62", "Nom patronymique", 0, Some(38), AZ_SP),
    field("63", "Nom d'usage", 0, Some(38), AZ_SP),
    field("64", "Nom d'épouse/époux", 0, Some(38), AZ_SP),
    field("65", "Type de pièce d'identité", 2, Some(2), AZ_SP),
    field("66", "Numéro de la pièce d'identité", 0, Some(20), AZ09),
    field("67", "Nationalité", 2, Some(2), TEXT),
    field("68", "Genre", 1, Some(1), AZ),
    field("69", "Date de naissance", 8, Some(8), DAY_MONTH_YEAR),
    field("6A", "Lieu de naissance", 0, Some(32), AZ_SP),
    field("6B", "Département du bureau émetteur", 3, Some(3), AZ09),
    field("6C", "Pays de naissance", 2, Some(2), TEXT),
    field("6D", "Nom et prénom du père", 0, Some(60), AZ09_SP_SL),
    field("6E", "Nom et prénom de la mère", 0, Some(60), AZ09_SP_SL),
    field("6F", "Machine Readable Zone (Zone de Lecture Automatique, ZLA)", 0, Some(90), AZ09_SP),
    field("6G", "Nom", 1, Some(38), AZ_SP),
    field("6H", "Civilité", 1, Some(10), AZ_SP),
    field("6I", "Pays émetteur", 2, Some(2), TEXT),
    field("6J", "Type de document étranger", 1, Some(1), NUMERIC0),
    field("6K", "Numéro de la demande de document étranger", 19, Some(19), NUMERIC0),
    field("6L", "Date de dépôt de la demande", 8, Some(8), DAY_MONTH_YEAR),
    field("6M", "Catégorie du titre", 0, Some(40), AZ_SP),
    field("6N", "Date de début de validité", 8, Some(8), DAY_MONTH_YEAR),
    field("6O", "Date de fin de validité", 8, Some(8), DAY_MONTH_YEAR),
    field("6P", "Autorisation", 0, Some(40), AZ_SP),
    field("6Q", "Numéro d'étranger", 0, Some(10), AZ09),
    field("6R", "Numéro de visa", 12, Some(12), AZ09),
    field("6S", "Ligne 2 de l'adresse postale du domicile", 0, Some(38), AZ09_SP),
    field("6T", "Ligne 3 de l'adresse postale du domicile", 0, Some(38), AZ09_SP),
    field("6U", "Ligne 4 de l'adresse postale du domicile", 0, Some(38), AZ09_SP),
    field("6V", "Ligne 5 de l'adresse postale du domicile", 0, Some(38), AZ09_SP),
    field("6W", "Code postal ou code cedex de l'adresse postale du domicile", 5, Some(5), NUMERIC0),
    field("6X", "Commune de l'adresse postale du domicile", 0, Some(32), AZ_SP),
    field("6Y", "Code pays de l'adresse postale du domicile", 2, Some(2), TEXT),
    field("6Z", "Numéro d'étranger de l'autorisation de travail", 9, Some(11), AZ09),
];

const HEALTH: &[FieldDefinition] = &[
    field("70", "Date et heure du décès", 12, Some(12), DATE_TIME),
    field("71", "Date et heure du constat de décès", 12, Some(12), DATE_TIME),
    field("72", "Nom du défunt", 1, Some(38), AZ_SP),
    field("73", "Prénoms du défunt", 0, Some(60), AZ_SP_SL),
    field("74", "Nom de jeune fille du défunt", 0, Some(38), AZ_SP),
    field("75", "Date de naissance du défunt", 8, Some(8), DAY_MONTH_YEAR),
    field("76", "Genre du défunt", 1, Some(1), AZ),
    field("77", "Commune de décès", 0, Some(45), AZ_SP),
    field("78", "Code postal de la commune de décès", 5, Some(5), NUMERIC0),
    field("79", "Adresse du domicile du défunt", 0, Some(114), AZ09_SP),
    field("7A", "Code postal du domicile du défunt", 5, Some(5), NUMERIC0),
    field("7B", "Commune du domicile du défunt", 0, Some(45), AZ_SP),
    field("7C", "Obstacle médico-légal", 1, Some(1), BOOLEAN),
    field("7D", "Mise en bière", 1, Some(1), AZ),
    field("7E", "Obstacle aux soins de conservation", 1, Some(1), BOOLEAN),
    field("7F", "Obstacle aux dons du corps", 1, Some(1), BOOLEAN),
    field("7G", "Recherche de la cause du décès", 1, Some(1), BOOLEAN),
    field("7H", "Délai de transport du corps", 2, Some(2), HEX_INT),
    field("7I", "Prothèse avec pile", 1, Some(1), BOOLEAN),
    field("7J", "Retrait de la pile de prothèse", 1, Some(1), BOOLEAN),
    field("7K", "Code NNC", 13, Some(13), AZ09),
    field("7L", "Code Finess de l'organisme agréé", 9, Some(9), AZ09),
    field("7M", "Identification du médecin", 0, Some(64), AZ09_SP),
    field("7N", "Lieu de validation du certificat de décès", 0, Some(128), AZ09_SP),
    field("7O", "Certificat de décès supplémentaire", 1, Some(1), BOOLEAN),
    field("7P", "Identifiant du certificat", 16, Some(16), AZ09),
];

const PROFESSIONAL: &[FieldDefinition] = &[
    field("80", "Nom", 0, Some(38), AZ_SP),
    field("81", "Prénoms", 0, Some(60), AZ_SP_SL),
    field("82", "Numéro de carte", 0, Some(20), AZ09_SP),
    field("83", "Organisme de tutelle", 0, Some(40), AZ09_SP),
    field("84", "Profession", 0, Some(40), AZ09_SP),
    field("85", "Numéro de permis de chasser", 17, Some(17), AZ09_DASH),
    field("86", "Numéro de licence", 12, Some(12), AZ09),
];

const LEGAL: &[FieldDefinition] = &[
    field("90", "Identité de l'huissier de justice", 0, Some(38), AZ_SP_SL),
    field("91", "Identité ou raison sociale du demandeur", 0, Some(38), AZ_SP_SL),
    field("92", "Identité ou raison sociale du destinataire", 0, Some(38), AZ_SP_SL),
    field("93", "Identité ou raison sociale de tiers concerné", 0, Some(38), AZ_SP_SL),
    field("94", "Intitulé de l'acte", 0, Some(38), AZ09_SP),
    field("95", "Numéro de l'acte", 0, Some(18), AZ09),
    field("96", "Date de signature de l'acte", 8, Some(8), DAY_MONTH_YEAR),
];

const VEHICLE: &[FieldDefinition] = &[
    field("A0", "Pays ayant émis l'immatriculation du véhicule", 2, Some(2), TEXT),
    field("A1", "Immatriculation du véhicule", 0, Some(17), AZ09_DASH),
    field("A2", "Marque du véhicule", 0, Some(17), AZ09_SP),
    field("A3", "Nom commercial du véhicule", 0, Some(17), AZ09_SP),
    field("A4", "Numéro de série du véhicule (VIN)", 17, Some(17), AZ09_SP),
    field("A5", "Catégorie du véhicule", 3, Some(3), AZ09_SP),
    field("A6", "Carburant", 2, Some(2), AZ09),
    field("A7", "Taux d'émission de CO2 du véhicule (en g/km)", 3, Some(3), HEX_INT),
    field("A8", "Indication de la classe environnementale de réception CE", 0, Some(12), AZ09_SP_SL),
    field("A9", "Classe d'émission polluante", 3, Some(3), TEXT),
    field("AA", "Date de première immatriculation du véhicule", 8, Some(8), DAY_MONTH_YEAR),
    field("AB", "Type de lettre", 0, Some(8), AZ09),
    field("AC", "N° Dossier", 0, Some(19), AZ09),
    field("AD", "Date Infraction", 4, Some(4), DATE4),
    field("AE", "Heure de l'infraction", 4, Some(4), HOUR_MINUTE),
    field("AF", "Nombre de points retirés lors de l'infraction", 1, Some(1), BASE36),
    field("AG", "Solde de points", 1, Some(1), BASE36),
    field("AH", "Numéro de la carte", 0, Some(30), AZ09),
    field("AI", "Date d'expiration initiale", 8, Some(8), DAY_MONTH_YEAR),
    field("AJ", "Numéro EVTC", 13, Some(13), AZ09),
    field("AK", "Numéro de macaron", 7, Some(7), NUMERIC0),
    field("AL", "Numéro de la carte", 11, Some(11), AZ09),
    field("AM", "Motif de sur-classement", 0, Some(5), AZ09_SP),
    field("AN", "Kilométrage", 8, Some(8), NUMERIC0),
    field("AO", "Numéro d'identification", 6, Some(6), NUMERIC0),
    field("AP", "Type d'engin", 0, Some(60), AZ_SP),
    field("AQ", "Numéro de série", 0, Some(25), AZ09),
    field("AR", "Modèle", 0, Some(35), AZ09_SP),
    field("AS", "Couleur dominante", 0, Some(10), AZ),
    field("AT", "Type de propriétaire", 1, Some(1), NUMERIC),
    field("AU", "Ligne 2 de l'adresse postale du propriétaire", 0, Some(38), AZ09_SP),
    field("AV", "Ligne 3 de l'adresse postale du propriétaire", 0, Some(38), AZ09_SP),
    field("AW", "Ligne 4 de l'adresse postale du propriétaire", 0, Some(38), AZ09_SP),
    field("AX", "Ligne 5 de l'adresse postale du propriétaire", 0, Some(38), AZ09_SP),
    field("AY", "Code postal ou code cedex de l'adresse postale du propriétaire", 5, Some(5), NUMERIC0),
    field("AZ", "Commune de l'adresse postale du propriétaire", 0, Some(32), AZ_SP),
];

const ACADEMIC: &[FieldDefinition] = &[
    field("B0", "Liste des prénoms", 0, Some(60), AZ_SP_SL),
    field("B1", "Prénom", 0, Some(20), AZ_SP),
    field("B2", "Nom patronymique", 0, Some(38), AZ_SP),
    field("B3", "Nom d'usage", 0, Some(38), AZ_SP),
    field("B4", "Nom d'épouse/époux", 0, Some(38), AZ_SP),
    field("B5", "Nationalité", 2, Some(2), TEXT),
    field("B6", "Genre", 1, Some(1), AZ),
    field("B7", "Date de naissance", 8, Some(8), DAY_MONTH_YEAR),
    field("B8", "Lieu de naissance", 0, Some(32), AZ09_SP),
    field("B9", "Pays de naissance", 2, Some(2), TEXT),
    field("BA", "Mention obtenue", 1, Some(1), NUMERIC),
    field("BB", "Numéro ou code d'identification de l'étudiant", 0, Some(50), AZ09_SP),
    field("BC", "Numéro du diplôme", 0, Some(20), AZ09_SP),
    field("BD", "Niveau du diplôme selon la classification CEC", 1, Some(1), NUMERIC),
    field("BE", "Crédits ECTS obtenus", 3, Some(3), NUMERIC0),
    field("BF", "Année universitaire", 3, Some(3), HEX_INT),
    field("BG", "Type de diplôme", 2, Some(2), AZ),
    field("BH", "Domaine", 0, Some(30), AZ09_SP),
    field("BI", "Mention", 0, Some(30), AZ09_SP),
    field("BJ", "Spécialité", 0, Some(30), AZ09_SP),
    field("BK", "Numéro de l'Attestation de versement de la CVE", 14, Some(14), AZ09_DASH),
];

const VEHICLE_TRANSFER: &[FieldDefinition] = &[
    field("C0", "Genre du vendeur", 1, Some(1), AZ),
    field("C1", "Nom patronymique du vendeur", 0, Some(38), AZ_SP),
    field("C2", "Prénom du vendeur", 0, Some(20), AZ_SP),
    field("C3", "Date et heure de la cession", 12, Some(12), DATE_TIME),
    field("C4", "Date de la signature du vendeur", 8, Some(8), DAY_MONTH_YEAR),
    field("C5", "Genre de l'acheteur", 1, Some(1), AZ),
    field("C6", "Nom patronymique de l'acheteur", 0, Some(38), AZ_SP),
    field("C7", "Prénom de l'acheteur", 0, Some(20), AZ_SP),
    field("C8", "Ligne 4 de la norme adresse postale du domicile de l'acheteur", 0, Some(38), AZ09_SP),
    field("C9", "Code postal ou code cedex du domicile de l'acheteur", 5, Some(5), NUMERIC0),
    field("CA", "Commune du domicile de l'acheteur", 0, Some(45), AZ_SP),
    field("CB", "N° d'enregistrement", 10, Some(10), NUMERIC0),
    field("CC", "Date et heure d'enregistrement dans le SIV", 12, Some(12), DATE_TIME),
];

const CUSTOMS: &[FieldDefinition] = &[
    field("D0", "Référence RTC", 17, Some(17), TEXT),
    field("D1", "Nom du titulaire", 0, Some(50), TEXT),
    field("D2", "EORI", 0, Some(20), AZ09),
    field("D3", "Date de début de validité", 8, Some(8), DAY_MONTH_YEAR),
    field("D4", "Date de fin de validité", 8, Some(8), DAY_MONTH_YEAR),
    field("D5", "Code marchandise", 8, Some(10), TEXT),
    field("D6", "Numéro de décision", 8, Some(8), NUMERIC0),
    field("D7", "Date de décision", 8, Some(8), DAY_MONTH_YEAR),
    field("D8", "Durée de validité", 2, Some(2), NUMERIC0),
    field("D9", "Date de fin de validité de la licence", 8, Some(8), DAY_MONTH_YEAR),
    field("DA", "Numéro de licence", 8, Some(8), NUMERIC0),
    field("DB", "Nom de l'expéditeur", 0, Some(50), AZ_SP),
    field("DC", "Prénom de l'expéditeur", 0, Some(50), AZ_SP),
    field("DD", "Date de naissance de l'expéditeur", 8, Some(8), DAY_MONTH_YEAR),
    field("DE", "Raison sociale de l'expéditeur", 0, Some(50), AZ09_SP),
    field("DF", "SIREN de l'expéditeur", 9, Some(9), NUMERIC0),
    field("DG", "SIRET de l'expéditeur", 14, Some(14), NUMERIC0),
    field("DH", "EORI de l'expéditeur", 0, Some(20), AZ09),
    field("DI", "TIN de l'expéditeur", 4, Some(30), AZ09),
    field("DJ", "Nom de l'exportateur", 0, Some(50), AZ_SP),
    field("DK", "Prénom de l'exportateur", 0, Some(50), AZ_SP),
    field("DL", "Date de naissance de l'exportateur", 8, Some(8), DAY_MONTH_YEAR),
    field("DM", "Raison sociale de l'exportateur", 0, Some(50), AZ09_SP),
    field("DN", "SIREN de l'exportateur", 9, Some(9), NUMERIC0),
    field("DO", "SIRET de l'exportateur", 14, Some(14), NUMERIC0),
    field("DP", "EORI de l'exportateur", 0, Some(20), AZ09),
    field("DQ", "Nom du destinataire", 0, Some(50), AZ_SP),
    field("DR", "Prénom du destinataire", 0, Some(50), AZ_SP),
    field("DS", "Date de naissance du destinataire", 8, Some(8), DAY_MONTH_YEAR),
    field("DT", "Raison sociale du destinataire", 0, Some(50), AZ09_SP),
    field("DU", "SIREN du destinataire", 9, Some(9), NUMERIC0),
    field("DV", "SIRET du destinataire", 14, Some(14), NUMERIC0),
    field("DW", "EORI du destinataire", 0, Some(50), AZ09),
    field("DX", "TIN du destinataire", 4, Some(30), AZ09),
    field("DY", "Nombre de lignes articles", 3, Some(3), NUMERIC0),
    field("DZ", "Numéro du bon de livraison", 0, Some(10), AZ09),
    field("H0", "Commune de l'expéditeur", 0, Some(38), NUMERIC0),
    field("H1", "Pays de l'expéditeur", 2, Some(2), AZ),
    field("H2", "Commune du destinataire", 0, Some(38), AZ_SP),
    field("H3", "Pays du destinataire", 2, Some(2), AZ),
    field("H4", "Date de départ", 8, Some(8), DAY_MONTH_YEAR),
    field("H5", "Date prévisionnelle d'arrivée", 8, Some(8), DAY_MONTH_YEAR),
    field("H6", "Numéro de plomb", 0, Some(40), NUMERIC),
    field("H7", "Codes douaniers", 0, Some(53), NUMERIC_SL),
    field("H8", "Nombre d'emballages articles", 7, Some(7), NUMERIC0),
    field("H9", "Poids brut articles", 8, Some(8), NUMERIC0),
    field("HA", "Poids net articles", 8, Some(8), NUMERIC0),
    field("HB", "Valeur douanière articles", 9, Some(9), NUMERIC0),
    field("HC", "But de la livraison", 0, Some(38), AZ_SP),
    field("HD", "Adresse de l'expéditeur", 0, Some(38), AZ_SP),
    field("HE", "Code postal et commune de l'expéditeur", 0, Some(38), AZ_SP),
    field("HF", "Adresse du destinataire", 0, Some(38), AZ_SP),
    field("HG", "Code postal et commune du destinataire", 0, Some(38), AZ_SP),
    field("HH", "Numéro d'identification du transport", 0, Some(20), AZ09_DASH_SL),
    field("HI", "Numéro, extension et libellé de voie de l'adresse de résidence", 0, Some(38), AZ_SP),
    field("HJ", "Code postal de l'adresse de résidence", 5, Some(5), NUMERIC_SP),
    field("HK", "Commune de l'adresse de résidence", 0, Some(32), AZ_SP),
    field("HL", "Code pays de l'adresse de résidence", 2, Some(2), AZ),
    field("HM", "Numéro de la CEAF", 15, Some(18), AZ_SP),
    field("HN", "Date et heure d'édition", 12, Some(12), DATE_TIME),
    field("HO", "Date d'expiration", 8, Some(8), DAY_MONTH_YEAR),
    field("HP", "Numéro SIA", 12, Some(12), AZ_SP),
    field("HQ", "Nombre d'armes de catégorie A", 2, Some(2), NUMERIC0),
    field("HR", "Nombre d'armes de catégorie B", 2, Some(2), NUMERIC0),
    field("HS", "Nombre d'armes de catégorie C", 2, Some(2), NUMERIC0),
];

const VIROLOGY: &[FieldDefinition] = &[
    field("F0", "Liste des prénoms", 0, Some(38), TEXT),
    field("F1", "Nom patronymique", 0, Some(60), TEXT),
    field("F2", "Date de naissance", 8, Some(8), DAY_MONTH_YEAR),
    field("F3", "Genre", 1, Some(1), AZ),
    field("F4", "Code analyse", 3, Some(7), AZ09),
    field("F5", "Résultat de l'analyse", 1, Some(1), AZ),
    field("F6", "Date et heure du prélèvement", 12, Some(12), DATE_TIME),
];

const VACCINATION: &[FieldDefinition] = &[
    field("L0", "Nom Patronymique du patient", 0, Some(80), TEXT),
    field("L1", "Liste des prénoms du patient", 0, Some(80), TEXT),
    field("L2", "Date de naissance du patient", 8, Some(8), DAY_MONTH_YEAR),
    field("L3", "Nom de la maladie couverte", 0, Some(30), TEXT),
    field("L4", "Agent prophylactique", 5, Some(15), TEXT),
    field("L5", "Nom du vaccin", 5, Some(30), TEXT),
    field("L6", "Fabricant du vaccin", 5, Some(30), TEXT),
    field("L7", "Rang du dernier état de vaccination effectué", 1, Some(1), NUMERIC0),
    field("L8", "Nombre de doses attendues pour un cycle complet", 1, Some(1), NUMERIC0),
    field("L9", "Date du dernier état du cycle de vaccination", 8, Some(8), DAY_MONTH_YEAR),
    field("LA", "Etat du cycle de vaccination", 2, Some(2), AZ),
];

const ASYLUM: &[FieldDefinition] = &[
    field("G0", "Type de procédure", 2, Some(2), AZ),
    field("G1", "Orientation régionale", 2, Some(2), AZ),
    field("G2", "Numéro d'usager", 0, Some(20), AZ09),
    field("G3", "Date de fin des droits", 8, Some(8), DAY_MONTH_YEAR),
    field("G4", "Somme des montants versés au titre de l'ADA", 0, Some(10), DECIMAL),
    field("G5", "Information de la Direction Territoriale", 0, Some(45), AZ09),
];

const DRIVING_LICENCE: &[FieldDefinition] = &[
    field("E0", "Type d'arrêtés Permis de conduire", 2, Some(2), AZ09),
    field("E1", "Date édition du document", 4, Some(4), DATE4),
    field("E2", "Date de fin de sanction", 4, Some(4), DATE4),
    field("E3", "Date de notification", 4, Some(4), DATE4),
    field("E4", "Type de relevé de permis de conduire", 3, Some(3), AZ),
    field("E5", "Etat du permis de conduire du conducteur", 2, Some(2), NUMERIC0),
    field("E6", "Catégories présentes de permis de conduire", 0, Some(65), AZ09_SP),
    field("E7", "SIREN du demandeur du document", 9, Some(9), NUMERIC0),
    field("E8", "Date des données issues du SNCP", 12, Some(12), DATE_TIME),
];

const NURSING: &[FieldDefinition] = &[
    field("I0", "Année du caducée", 4, Some(4), NUMERIC0),
    field("I1", "Numéro ordinal", 7, Some(7), NUMERIC0),
    field("I2", "Mention spécifique", 16, Some(16), AZ09),
    field("I3", "Nom d'exercice", 1, Some(54), AZ09_SP_AT_DASH),
    field("I4", "Prénom d'exercice", 1, Some(37), AZ09_SP_AT_DASH),
    field("I5", "Mode d'exercice", 5, Some(13), AZ09_DASH),
    field("I6", "Numéro RPPS", 11, Some(11), NUMERIC0),
];

pub(crate) const PERIMETER_1_GROUPS: &[Group] = &[
    Group::new("Identifiants de données complémentaires du code 2D-DOC", SUPPLEMENTARY),
    Group::new("Identifiants de données propres aux factures", INVOICE),
    Group::new("Identifiants de données bancaires", BANKING),
    Group::new("Identifiants de données fiscales", TAX),
    Group::new("Identifiants de données relatives à l'activité professionnelle", EMPLOYMENT),
    Group::new("Identifiants de données relatives aux titres d'identité", IDENTITY),
    Group::new("Identifiants de données relatives aux données de santé", HEALTH),
    Group::new("Identifiants relatifs aux activités professionnelles", PROFESSIONAL),
    Group::new("Identifiants relatifs aux données juridiques/judiciaires", LEGAL),
    Group::new("Identifiants de données relatives aux véhicules", VEHICLE),
    Group::new("Identifiants de données pour les justificatifs académiques", ACADEMIC),
    Group::new("Identifiants de données relatives au certificat de cession électronique", VEHICLE_TRANSFER),
    Group::new("Identifiants de données relatives aux autorisations douanières", CUSTOMS),
    Group::new("Identifiants de données relatives aux résultats des tests virologiques", VIROLOGY),
    Group::new("Identifiants de données relatives à une attestation vaccinale", VACCINATION),
    Group::new("Identifiants de données relatives à l'asile", ASYLUM),
    Group::new("Identifiants de données relatives au permis de conduire", DRIVING_LICENCE),
    Group::new("Identifiants de données relatives au caducée infirmier", NURSING),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_ids_are_unique_and_two_chars() {
        let mut seen = HashSet::new();
        for group in PERIMETER_1_GROUPS {
            for def in group.definitions {
                assert_eq!(def.id.chars().count(), 2, "{}", def.id);
                assert!(seen.insert(&*def.id), "duplicate {}", def.id);
            }
        }
        assert!(seen.len() > 300);
    }

    #[test]
    fn test_bounds_are_consistent() {
        for group in PERIMETER_1_GROUPS {
            for def in group.definitions {
                if let Some(max) = def.size_max {
                    assert!(def.size_min <= max, "{}", def.id);
                }
            }
        }
    }

    #[test]
    fn test_doctype_ids_are_two_chars() {
        assert!(PERIMETER_1_DOCTYPES.iter().all(|d| d.id.chars().count() == 2));
    }
}
