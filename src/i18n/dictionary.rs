//! The bilingual string dictionary.
//!
//! Pure data: every entry is a `&'static` value compiled into the binary.
//! Keys are dot-namespaced and identical across languages; the stable
//! `key` of each service record is shared between languages because it
//! doubles as the routing identifier for the detail panel.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Lang;

/// One translated service card on the services rail.
#[derive(Clone, Copy, Debug)]
pub struct ServiceEntry {
    /// Stable identifier, shared across languages (routing contract).
    pub key: &'static str,
    /// Card title.
    pub title: &'static str,
    /// One-line card description.
    pub description: &'static str,
    /// Longer copy for the detail panel, when written.
    pub long_description: Option<&'static str>,
    /// Small badge labels.
    pub tags: &'static [&'static str],
}

/// A dictionary value: plain text, an ordered list, or service records.
#[derive(Clone, Copy, Debug)]
pub enum Entry {
    /// A single string.
    Text(&'static str),
    /// An ordered list of strings.
    List(&'static [&'static str]),
    /// Structured service records.
    Services(&'static [ServiceEntry]),
}

/// What: Look up a dictionary entry for one language.
///
/// Inputs:
/// - `lang`: Language table to consult
/// - `key`: Dot-notation key
///
/// Output:
/// - `Some(&Entry)` when present; `None` otherwise. Fallback policy lives
///   in the callers ([`super::t`] and friends), not here.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static Entry> {
    table(lang).get(key).copied()
}

fn table(lang: Lang) -> &'static HashMap<&'static str, &'static Entry> {
    static EN: OnceLock<HashMap<&'static str, &'static Entry>> = OnceLock::new();
    static ES: OnceLock<HashMap<&'static str, &'static Entry>> = OnceLock::new();
    match lang {
        Lang::En => EN.get_or_init(|| build(EN_ENTRIES)),
        Lang::Es => ES.get_or_init(|| build(ES_ENTRIES)),
    }
}

fn build(
    pairs: &'static [(&'static str, Entry)],
) -> HashMap<&'static str, &'static Entry> {
    pairs.iter().map(|(k, v)| (*k, v)).collect()
}

const EN_SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        key: "primary-care",
        title: "Primary Care",
        description: "Everyday medicine for adults: checkups, prevention, and sick visits.",
        long_description: Some(
            "Comprehensive primary care for adults of every age. Annual wellness \
             exams, preventive screenings, lab work, and same-week sick visits, \
             all coordinated by the physician who knows your history.",
        ),
        tags: &["adults", "prevention"],
    },
    ServiceEntry {
        key: "pediatrics",
        title: "Pediatrics",
        description: "Well-child visits and sick care from newborns through teens.",
        long_description: Some(
            "From the first newborn weight check to the last sports season, our \
             pediatric team follows your child's growth, development, and \
             milestones with visits timed to the AAP schedule.",
        ),
        tags: &["children", "well-child"],
    },
    ServiceEntry {
        key: "immunizations",
        title: "Immunizations",
        description: "Routine vaccines for children and adults, on schedule.",
        long_description: Some(
            "All routine childhood and adult immunizations, including school \
             series, flu season shots, and catch-up plans for missed doses.",
        ),
        tags: &["vaccines", "all ages"],
    },
    ServiceEntry {
        key: "school-physicals",
        title: "School & Sports Physicals",
        description: "Same-week forms for school, camp, and team sports.",
        long_description: Some(
            "Quick, thorough physicals with the paperwork finished before you \
             leave: school entry forms, camp forms, and sports clearances.",
        ),
        tags: &["children", "forms"],
    },
    ServiceEntry {
        key: "chronic-care",
        title: "Chronic Care",
        description: "Ongoing management of diabetes, hypertension, and asthma.",
        long_description: Some(
            "Structured follow-up for long-term conditions: medication reviews, \
             home-reading checks, and a plan you understand in your language.",
        ),
        tags: &["adults", "follow-up"],
    },
    ServiceEntry {
        key: "telehealth",
        title: "Telehealth",
        description: "Video visits for follow-ups and minor concerns.",
        long_description: None,
        tags: &["virtual"],
    },
];

const ES_SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        key: "primary-care",
        title: "Medicina Primaria",
        description: "Medicina diaria para adultos: chequeos, prevención y consultas.",
        long_description: Some(
            "Atención primaria integral para adultos de todas las edades. \
             Exámenes anuales de bienestar, pruebas preventivas, laboratorios y \
             citas por enfermedad en la misma semana, coordinadas por el médico \
             que conoce su historia.",
        ),
        tags: &["adultos", "prevención"],
    },
    ServiceEntry {
        key: "pediatrics",
        title: "Pediatría",
        description: "Visitas de niño sano y atención por enfermedad, de recién nacidos a adolescentes.",
        long_description: Some(
            "Desde el primer control del recién nacido hasta la última temporada \
             deportiva, nuestro equipo pediátrico sigue el crecimiento y el \
             desarrollo de su hijo con visitas según el calendario de la AAP.",
        ),
        tags: &["niños", "niño sano"],
    },
    ServiceEntry {
        key: "immunizations",
        title: "Vacunas",
        description: "Vacunas de rutina para niños y adultos, al día.",
        long_description: Some(
            "Todas las vacunas de rutina para niños y adultos, incluidas las \
             series escolares, la vacuna de la influenza y planes de recuperación \
             para dosis atrasadas.",
        ),
        tags: &["vacunas", "todas las edades"],
    },
    ServiceEntry {
        key: "school-physicals",
        title: "Físicos Escolares y Deportivos",
        description: "Formularios en la misma semana para escuela, campamento y deportes.",
        long_description: Some(
            "Exámenes físicos rápidos y completos con el papeleo listo antes de \
             salir: formularios escolares, de campamento y autorizaciones \
             deportivas.",
        ),
        tags: &["niños", "formularios"],
    },
    ServiceEntry {
        key: "chronic-care",
        title: "Cuidado Crónico",
        description: "Manejo continuo de diabetes, hipertensión y asma.",
        long_description: Some(
            "Seguimiento estructurado para condiciones de largo plazo: revisión \
             de medicamentos, control de lecturas en casa y un plan que usted \
             entiende en su idioma.",
        ),
        tags: &["adultos", "seguimiento"],
    },
    ServiceEntry {
        key: "telehealth",
        title: "Telemedicina",
        description: "Citas por video para seguimientos y molestias menores.",
        long_description: None,
        tags: &["virtual"],
    },
];

const EN_ENTRIES: &[(&str, Entry)] = &[
    ("app.title", Entry::Text("Acosta Family Clinic")),
    ("app.tagline", Entry::Text("Caring for Central Florida families since 1998")),
    // Navigation
    ("nav.home", Entry::Text("Home")),
    ("nav.about", Entry::Text("About")),
    ("nav.services", Entry::Text("Services")),
    ("nav.gallery", Entry::Text("Gallery")),
    ("nav.insurance", Entry::Text("Insurance")),
    ("nav.contact", Entry::Text("Contact")),
    ("nav.providers", Entry::Text("Providers")),
    // Home / hero
    ("home.eyebrow", Entry::Text("Adult & Pediatric Care")),
    (
        "home.banner.titles",
        Entry::List(&[
            "Your family's doctor, in your language",
            "Same-week appointments",
            "Now welcoming new patients",
        ]),
    ),
    (
        "home.banner.subtitles",
        Entry::List(&[
            "Bilingual care for every generation under one roof.",
            "Sick visits and physicals without the long wait.",
            "Most major insurance plans accepted.",
        ]),
    ),
    ("home.cta.contact", Entry::Text("Request an appointment")),
    ("home.cta.services", Entry::Text("See our services")),
    ("home.mission.title", Entry::Text("Medicine that knows your name")),
    (
        "home.mission.body",
        Entry::Text(
            "We are a neighborhood clinic, not a network. The doctor who sees \
             your newborn is the same one who sees your parents, and the front \
             desk answers in English or Spanish, whichever feels like home.",
        ),
    ),
    ("home.services.title", Entry::Text("What we do")),
    // About
    ("about.title", Entry::Text("About our clinic")),
    (
        "about.body",
        Entry::Text(
            "Founded in 1998 by Dr. Jaime A. Acosta, the clinic has grown from a \
             two-room office into a full family practice while keeping the same \
             promise: every patient is seen as a person first.",
        ),
    ),
    ("about.mission.title", Entry::Text("Our mission")),
    (
        "about.mission.body",
        Entry::Text(
            "Accessible, bilingual, evidence-based care for every stage of \
             life, delivered with the warmth of a family practice.",
        ),
    ),
    ("about.values.title", Entry::Text("What we stand for")),
    (
        "about.values",
        Entry::List(&[
            "Every visit starts by listening",
            "Two languages, one standard of care",
            "Prevention before prescription",
            "Families treated as families",
        ]),
    ),
    ("about.stats.years", Entry::Text("Years serving Orlando")),
    ("about.stats.patients", Entry::Text("Patients cared for")),
    ("about.stats.providers", Entry::Text("Providers on staff")),
    // Services screen
    ("services.title", Entry::Text("Our services")),
    (
        "services.subtitle",
        Entry::Text("Browse the rail; press Enter for details on any service."),
    ),
    ("services.items", Entry::Services(EN_SERVICES)),
    ("services.detail.hint", Entry::Text("Esc closes the detail panel")),
    // Gallery
    ("gallery.title", Entry::Text("Inside the clinic")),
    (
        "gallery.captions",
        Entry::List(&[
            "The front desk, ready to help",
            "Waiting room with the fish tank",
            "Pediatric exam room one",
            "Our lab draw station",
            "The vaccine fridge, always stocked",
            "Consultation room",
            "The kids' corner",
            "Our team at the fall health fair",
        ]),
    ),
    // Insurance
    ("insurance.title", Entry::Text("Insurance lookup")),
    (
        "insurance.hint",
        Entry::Text("Type to search plans; Tab changes provider; Esc closes."),
    ),
    ("insurance.all_providers", Entry::Text("All providers")),
    ("insurance.search_label", Entry::Text("Search plans")),
    ("insurance.provider_label", Entry::Text("Provider")),
    ("insurance.no_results", Entry::Text("No matching plans. Call us to confirm coverage.")),
    ("insurance.results", Entry::Text("{count} accepted plans")),
    // Contact form
    ("contact.title", Entry::Text("Request an appointment")),
    ("contact.intro", Entry::Text("Tell us who you are and we will call you back within one business day.")),
    ("contact.name", Entry::Text("Patient name")),
    ("contact.email", Entry::Text("Email")),
    ("contact.phone", Entry::Text("Phone")),
    ("contact.reason", Entry::Text("Reason for visit")),
    ("contact.appointment", Entry::Text("Appointment type")),
    ("contact.doctor", Entry::Text("Preferred doctor (optional)")),
    ("contact.message", Entry::Text("Message (optional)")),
    ("contact.submit", Entry::Text("Send request")),
    (
        "contact.reasons",
        Entry::List(&["Well visit", "Sick visit", "Vaccine", "Other"]),
    ),
    (
        "contact.appointments",
        Entry::List(&["New patient", "Follow-up"]),
    ),
    ("contact.err.name", Entry::Text("Please enter the patient's name.")),
    ("contact.err.email", Entry::Text("Please enter a valid email address.")),
    ("contact.err.phone", Entry::Text("Please enter a phone number with at least 10 digits.")),
    ("contact.err.reason", Entry::Text("Please choose a reason for the visit.")),
    ("contact.err.network", Entry::Text("We couldn't send your request. Please try again.")),
    ("contact.sending", Entry::Text("Sending…")),
    ("contact.success.title", Entry::Text("Request received")),
    (
        "contact.success.body",
        Entry::Text(
            "Thank you, {name}! We will call you within one business day to \
             confirm your appointment.",
        ),
    ),
    ("contact.success.dismiss", Entry::Text("Send another request")),
    // Providers
    ("provider.title", Entry::Text("Our providers")),
    ("provider.accepting", Entry::Text("Accepting new patients")),
    ("provider.plans", Entry::Text("Accepted insurance")),
    ("provider.back", Entry::Text("Esc returns to the provider list")),
    (
        "provider.bio.acosta",
        Entry::Text(
            "Board-certified in family medicine, Dr. Acosta founded the clinic \
             in 1998 after residency at Orlando Health. He sees adults and \
             children and consults in English and Spanish.",
        ),
    ),
    (
        "provider.bio.perez",
        Entry::Text(
            "Dr. Pérez joined in 2011 and leads the pediatric practice. Her \
             special interests are newborn care and childhood asthma.",
        ),
    ),
    ("provider.specialty.family", Entry::Text("Family Medicine")),
    ("provider.specialty.peds", Entry::Text("Pediatrics")),
    // Coming soon
    ("soon.title", Entry::Text("Coming soon")),
    ("soon.body", Entry::Text("This page is on its way. Check back shortly.")),
    // Footer hints
    ("footer.global", Entry::Text("1-7 screens · L language · Q quit")),
    ("footer.services", Entry::Text("←/→ browse · Enter details · numbers jump")),
    ("footer.gallery", Entry::Text("←/→ browse photos")),
    ("footer.contact", Entry::Text("Tab next field · Enter send")),
    ("footer.insurance", Entry::Text("Type to filter · Tab provider · Esc close")),
    // Language picker
    ("language.title", Entry::Text("Language / Idioma")),
    ("language.switched", Entry::Text("Language set to {lang}")),
];

const ES_ENTRIES: &[(&str, Entry)] = &[
    ("app.title", Entry::Text("Clínica Familiar Acosta")),
    ("app.tagline", Entry::Text("Cuidando a las familias de Florida Central desde 1998")),
    // Navigation
    ("nav.home", Entry::Text("Inicio")),
    ("nav.about", Entry::Text("Nosotros")),
    ("nav.services", Entry::Text("Servicios")),
    ("nav.gallery", Entry::Text("Galería")),
    ("nav.insurance", Entry::Text("Seguros")),
    ("nav.contact", Entry::Text("Contacto")),
    ("nav.providers", Entry::Text("Médicos")),
    // Home / hero
    ("home.eyebrow", Entry::Text("Atención para Adultos y Niños")),
    (
        "home.banner.titles",
        Entry::List(&[
            "El médico de su familia, en su idioma",
            "Citas en la misma semana",
            "Aceptamos pacientes nuevos",
        ]),
    ),
    (
        "home.banner.subtitles",
        Entry::List(&[
            "Atención bilingüe para cada generación bajo un mismo techo.",
            "Consultas por enfermedad y físicos sin largas esperas.",
            "Aceptamos la mayoría de los seguros médicos.",
        ]),
    ),
    ("home.cta.contact", Entry::Text("Solicitar una cita")),
    ("home.cta.services", Entry::Text("Ver nuestros servicios")),
    ("home.mission.title", Entry::Text("Medicina que sabe su nombre")),
    (
        "home.mission.body",
        Entry::Text(
            "Somos una clínica de barrio, no una cadena. El médico que atiende a \
             su recién nacido es el mismo que atiende a sus padres, y en \
             recepción le contestan en inglés o en español, como usted prefiera.",
        ),
    ),
    ("home.services.title", Entry::Text("Lo que hacemos")),
    // About
    ("about.title", Entry::Text("Sobre nuestra clínica")),
    (
        "about.body",
        Entry::Text(
            "Fundada en 1998 por el Dr. Jaime A. Acosta, la clínica creció de una \
             oficina de dos cuartos a una práctica familiar completa manteniendo \
             la misma promesa: cada paciente es ante todo una persona.",
        ),
    ),
    ("about.mission.title", Entry::Text("Nuestra misión")),
    (
        "about.mission.body",
        Entry::Text(
            "Atención accesible, bilingüe y basada en evidencia para cada etapa \
             de la vida, con la calidez de una práctica familiar.",
        ),
    ),
    ("about.values.title", Entry::Text("Lo que nos define")),
    (
        "about.values",
        Entry::List(&[
            "Cada visita empieza por escuchar",
            "Dos idiomas, un solo estándar de atención",
            "Prevención antes que receta",
            "Las familias se atienden como familias",
        ]),
    ),
    ("about.stats.years", Entry::Text("Años sirviendo a Orlando")),
    ("about.stats.patients", Entry::Text("Pacientes atendidos")),
    ("about.stats.providers", Entry::Text("Médicos en el equipo")),
    // Services screen
    ("services.title", Entry::Text("Nuestros servicios")),
    (
        "services.subtitle",
        Entry::Text("Recorra el carrusel; presione Enter para ver los detalles."),
    ),
    ("services.items", Entry::Services(ES_SERVICES)),
    ("services.detail.hint", Entry::Text("Esc cierra el panel de detalles")),
    // Gallery
    ("gallery.title", Entry::Text("Dentro de la clínica")),
    (
        "gallery.captions",
        Entry::List(&[
            "La recepción, lista para ayudar",
            "Sala de espera con la pecera",
            "Consultorio pediátrico uno",
            "Estación de laboratorio",
            "El refrigerador de vacunas, siempre surtido",
            "Sala de consulta",
            "El rincón de los niños",
            "Nuestro equipo en la feria de salud de otoño",
        ]),
    ),
    // Insurance
    ("insurance.title", Entry::Text("Buscador de seguros")),
    (
        "insurance.hint",
        Entry::Text("Escriba para buscar planes; Tab cambia de médico; Esc cierra."),
    ),
    ("insurance.all_providers", Entry::Text("Todos los médicos")),
    ("insurance.search_label", Entry::Text("Buscar planes")),
    ("insurance.provider_label", Entry::Text("Médico")),
    ("insurance.no_results", Entry::Text("No hay planes que coincidan. Llámenos para confirmar su cobertura.")),
    ("insurance.results", Entry::Text("{count} planes aceptados")),
    // Contact form
    ("contact.title", Entry::Text("Solicitar una cita")),
    ("contact.intro", Entry::Text("Díganos quién es y le devolveremos la llamada en un día hábil.")),
    ("contact.name", Entry::Text("Nombre del paciente")),
    ("contact.email", Entry::Text("Correo electrónico")),
    ("contact.phone", Entry::Text("Teléfono")),
    ("contact.reason", Entry::Text("Motivo de la visita")),
    ("contact.appointment", Entry::Text("Tipo de cita")),
    ("contact.doctor", Entry::Text("Médico de preferencia (opcional)")),
    ("contact.message", Entry::Text("Mensaje (opcional)")),
    ("contact.submit", Entry::Text("Enviar solicitud")),
    (
        "contact.reasons",
        Entry::List(&["Visita de rutina", "Visita por enfermedad", "Vacuna", "Otro"]),
    ),
    (
        "contact.appointments",
        Entry::List(&["Paciente nuevo", "Seguimiento"]),
    ),
    ("contact.err.name", Entry::Text("Por favor escriba el nombre del paciente.")),
    ("contact.err.email", Entry::Text("Por favor escriba un correo electrónico válido.")),
    ("contact.err.phone", Entry::Text("Por favor escriba un teléfono con al menos 10 dígitos.")),
    ("contact.err.reason", Entry::Text("Por favor elija el motivo de la visita.")),
    ("contact.err.network", Entry::Text("No pudimos enviar su solicitud. Inténtelo de nuevo.")),
    ("contact.sending", Entry::Text("Enviando…")),
    ("contact.success.title", Entry::Text("Solicitud recibida")),
    (
        "contact.success.body",
        Entry::Text(
            "¡Gracias, {name}! Le llamaremos dentro de un día hábil para \
             confirmar su cita.",
        ),
    ),
    ("contact.success.dismiss", Entry::Text("Enviar otra solicitud")),
    // Providers
    ("provider.title", Entry::Text("Nuestros médicos")),
    ("provider.accepting", Entry::Text("Aceptando pacientes nuevos")),
    ("provider.plans", Entry::Text("Seguros aceptados")),
    ("provider.back", Entry::Text("Esc regresa a la lista de médicos")),
    (
        "provider.bio.acosta",
        Entry::Text(
            "Certificado en medicina familiar, el Dr. Acosta fundó la clínica en \
             1998 tras su residencia en Orlando Health. Atiende a adultos y \
             niños y consulta en inglés y español.",
        ),
    ),
    (
        "provider.bio.perez",
        Entry::Text(
            "La Dra. Pérez se unió en 2011 y dirige la práctica pediátrica. Sus \
             intereses especiales son el cuidado del recién nacido y el asma \
             infantil.",
        ),
    ),
    ("provider.specialty.family", Entry::Text("Medicina Familiar")),
    ("provider.specialty.peds", Entry::Text("Pediatría")),
    // Coming soon
    ("soon.title", Entry::Text("Próximamente")),
    ("soon.body", Entry::Text("Esta página está en camino. Vuelva pronto.")),
    // Footer hints
    ("footer.global", Entry::Text("1-7 pantallas · L idioma · Q salir")),
    ("footer.services", Entry::Text("←/→ recorrer · Enter detalles · números saltan")),
    ("footer.gallery", Entry::Text("←/→ recorrer fotos")),
    ("footer.contact", Entry::Text("Tab siguiente campo · Enter enviar")),
    ("footer.insurance", Entry::Text("Escriba para filtrar · Tab médico · Esc cerrar")),
    // Language picker
    ("language.title", Entry::Text("Language / Idioma")),
    ("language.switched", Entry::Text("Idioma cambiado a {lang}")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Both language tables cover the same key set
    ///
    /// - Input: The compiled EN and ES entry lists
    /// - Output: Identical key sets, no duplicates within a table
    fn dictionary_tables_are_parallel() {
        let en: std::collections::BTreeSet<_> = EN_ENTRIES.iter().map(|(k, _)| *k).collect();
        let es: std::collections::BTreeSet<_> = ES_ENTRIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(en.len(), EN_ENTRIES.len(), "duplicate key in EN table");
        assert_eq!(es.len(), ES_ENTRIES.len(), "duplicate key in ES table");
        assert_eq!(en, es, "EN and ES tables diverge");
    }

    #[test]
    /// What: Parallel entries agree on value type
    ///
    /// - Input: Every key present in both tables
    /// - Output: Text pairs with Text, List with List, Services with Services
    fn dictionary_types_agree_across_languages() {
        for (key, en_entry) in EN_ENTRIES {
            let es_entry = lookup(Lang::Es, key).expect("key present in ES");
            let same = matches!(
                (en_entry, es_entry),
                (Entry::Text(_), Entry::Text(_))
                    | (Entry::List(_), Entry::List(_))
                    | (Entry::Services(_), Entry::Services(_))
            );
            assert!(same, "type mismatch for key {key}");
        }
    }

    #[test]
    /// What: Parallel list entries have equal lengths
    ///
    /// - Input: Every list-typed key
    /// - Output: EN and ES lists are the same length (carousel/dots contract)
    fn dictionary_list_lengths_match() {
        for (key, en_entry) in EN_ENTRIES {
            if let Entry::List(en_items) = en_entry
                && let Some(Entry::List(es_items)) = lookup(Lang::Es, key)
            {
                assert_eq!(en_items.len(), es_items.len(), "list length differs for {key}");
            }
        }
    }
}
