//! # Builtin Catalog
//!
//! The compiled-in requirement list for Colombian food labels.
//!
//! | Category | Resolutions |
//! |----------|-------------|
//! | Rotulado general | 5109 de 2005 |
//! | Información nutricional | 810 de 2021, 2492 de 2022 |
//! | Etiquetado frontal de advertencia | 810 de 2021, 2492 de 2022 |
//! | Declaraciones y advertencias | 5109, 810, 333 de 2011 |
//! | Presentación y legibilidad | 5109, 810 |

use labelcheck_core::{Applicability, ChecklistItem, ConfigurationError, Severity};

use crate::catalog::Catalog;

/// Name of the compiled-in catalog.
pub const BUILTIN_CATALOG_NAME: &str = "Etiquetado nutricional — Resoluciones 5109, 810 y 2492";

const GENERAL: &str = "Resolución 5109 — Rotulado general";
const NUTRITION: &str = "Resoluciones 810 y 2492 — Información nutricional";
const FRONT: &str = "Etiquetado frontal de advertencia (810 y 2492)";
const CLAIMS: &str = "Declaraciones y advertencias";
const PRESENTATION: &str = "Presentación y legibilidad";

struct Entry {
    category: &'static str,
    title: &'static str,
    what_to_check: &'static str,
    recommendation: &'static str,
    reference: &'static str,
    severity: Severity,
    applicability: Applicability,
}

const BUILTIN_ITEMS: &[Entry] = &[
    Entry {
        category: GENERAL,
        title: "Denominación del producto correcta",
        what_to_check: "Verificar que la denominación describa el alimento según su naturaleza, sin inducir a error.",
        recommendation: "Modificar la denominación para reflejar el tipo de alimento según ingredientes principales.",
        reference: "Resol. 5109 Art. 4",
        severity: Severity::Critical,
        applicability: Applicability::Both,
    },
    Entry {
        category: GENERAL,
        title: "Lista de ingredientes en orden decreciente",
        what_to_check: "Confirmar que todos los ingredientes estén listados en orden de peso en español.",
        recommendation: "Agregar lista completa de ingredientes y verificar su orden.",
        reference: "Resol. 5109 Art. 6",
        severity: Severity::Critical,
        applicability: Applicability::Both,
    },
    Entry {
        category: GENERAL,
        title: "Contenido neto declarado en unidades SI",
        what_to_check: "Revisar que el contenido neto esté en g, mL o L y sea legible.",
        recommendation: "Corregir etiqueta para usar unidades del Sistema Internacional.",
        reference: "Resol. 5109 Art. 7",
        severity: Severity::Medium,
        applicability: Applicability::Both,
    },
    Entry {
        category: GENERAL,
        title: "Datos del fabricante o importador visibles",
        what_to_check: "Verificar nombre o razón social y dirección del responsable.",
        recommendation: "Incluir datos completos del responsable del producto.",
        reference: "Resol. 5109 Art. 8",
        severity: Severity::Medium,
        applicability: Applicability::Both,
    },
    Entry {
        category: GENERAL,
        title: "Lote y fecha de vencimiento legibles",
        what_to_check: "Comprobar existencia y formato de lote y fecha.",
        recommendation: "Asegurar impresión legible y formato correcto (día/mes/año).",
        reference: "Resol. 5109 Art. 10–11",
        severity: Severity::Critical,
        applicability: Applicability::Both,
    },
    Entry {
        category: GENERAL,
        title: "Idioma español obligatorio",
        what_to_check: "Verificar que toda la información esté en español.",
        recommendation: "Agregar rótulo complementario en español si aplica.",
        reference: "Resol. 5109 Art. 18",
        severity: Severity::Medium,
        applicability: Applicability::Both,
    },
    Entry {
        category: NUTRITION,
        title: "Tabla de información nutricional presente",
        what_to_check: "Confirmar que exista la tabla dentro de un recuadro visible.",
        recommendation: "Incluir tabla de información nutricional con borde negro visible.",
        reference: "Resol. 810 Art. 27",
        severity: Severity::Critical,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: NUTRITION,
        title: "Columnas 'Por 100 g/mL' y 'Por porción'",
        what_to_check: "Revisar que estén ambas columnas con títulos exactos.",
        recommendation: "Agregar o corregir las columnas según la norma.",
        reference: "Resol. 810 Art. 30",
        severity: Severity::Medium,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: NUTRITION,
        title: "Orden de nutrientes obligatorio",
        what_to_check: "Verificar el orden normativo: calorías, grasa total, grasa saturada, trans, carbohidratos, fibra, azúcares, añadidos, proteína, sodio.",
        recommendation: "Ajustar el orden y unidades según la norma.",
        reference: "Resol. 810 Art. 28",
        severity: Severity::Medium,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: NUTRITION,
        title: "Vitaminas y minerales declarados correctamente",
        what_to_check: "Comprobar orden, unidades (mg, µg, UI) y línea separadora.",
        recommendation: "Corregir unidades o formato según la resolución.",
        reference: "Resol. 810 Art. 28.3",
        severity: Severity::Minor,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: NUTRITION,
        title: "Frase 'No es fuente significativa de…' (si aplica)",
        what_to_check: "Verificar si aplica y que esté incluida dentro del recuadro.",
        recommendation: "Agregar la frase cuando haya nutrientes en cantidades no significativas.",
        reference: "Resol. 810 Art. 27.1.2",
        severity: Severity::Minor,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: FRONT,
        title: "Presencia de sellos frontales cuando aplica",
        what_to_check: "Verificar que los sellos aparezcan solo si se superan los umbrales normativos.",
        recommendation: "Agregar o retirar sellos conforme a los valores declarados.",
        reference: "Resol. 810/2492",
        severity: Severity::Critical,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: FRONT,
        title: "Forma y color del sello",
        what_to_check: "Revisar forma octogonal, fondo negro, borde blanco y texto centrado.",
        recommendation: "Rediseñar sellos conforme a especificaciones oficiales.",
        reference: "Resol. 810/2492",
        severity: Severity::Medium,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: FRONT,
        title: "Tamaño proporcional del sello",
        what_to_check: "Comprobar que ocupe al menos el 10% del área principal del envase.",
        recommendation: "Ajustar tamaño para cumplir proporción mínima.",
        reference: "Resol. 810/2492",
        severity: Severity::Medium,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: FRONT,
        title: "Ubicación del sello frontal",
        what_to_check: "Verificar que esté en la parte superior derecha sin interferencias.",
        recommendation: "Reubicar sello en área principal visible.",
        reference: "Resol. 810/2492",
        severity: Severity::Minor,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: CLAIMS,
        title: "Declaración de alérgenos visible",
        what_to_check: "Comprobar leyendas 'Contiene…' o 'Puede contener…'.",
        recommendation: "Agregar declaración de alérgenos en lugar visible.",
        reference: "Resol. 5109/810",
        severity: Severity::Critical,
        applicability: Applicability::Both,
    },
    Entry {
        category: CLAIMS,
        title: "Advertencias especiales (edulcorantes, cafeína, etc.)",
        what_to_check: "Verificar presencia de advertencias según los ingredientes.",
        recommendation: "Incluir advertencias obligatorias conforme a la norma.",
        reference: "Resol. 810",
        severity: Severity::Critical,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: CLAIMS,
        title: "Claims nutricionales o saludables verificables",
        what_to_check: "Revisar que cualquier claim tenga sustento técnico y cumpla requisitos.",
        recommendation: "Retirar claims no verificables o añadir respaldo técnico.",
        reference: "Resol. 333/2011 y 810",
        severity: Severity::Medium,
        applicability: Applicability::FinishedProduct,
    },
    Entry {
        category: PRESENTATION,
        title: "Contraste y legibilidad del texto",
        what_to_check: "Comprobar que los textos sean claros y sin sobreimpresiones.",
        recommendation: "Mejorar contraste o posición del texto.",
        reference: "Resol. 5109/810",
        severity: Severity::Minor,
        applicability: Applicability::Both,
    },
    Entry {
        category: PRESENTATION,
        title: "Etiqueta complementaria para productos importados",
        what_to_check: "Verificar existencia y adherencia correcta de la etiqueta complementaria.",
        recommendation: "Agregar etiqueta conforme a la normativa colombiana.",
        reference: "Resol. 5109 Parágrafo",
        severity: Severity::Medium,
        applicability: Applicability::Both,
    },
];

/// Build and validate the compiled-in catalog.
///
/// Validation runs on every call, so a duplicate introduced into the
/// table above fails the first load instead of silently shadowing an item.
pub fn builtin_catalog() -> Result<Catalog, ConfigurationError> {
    let items = BUILTIN_ITEMS
        .iter()
        .map(|e| ChecklistItem {
            category: e.category.to_string(),
            title: e.title.to_string(),
            what_to_check: e.what_to_check.to_string(),
            recommendation: e.recommendation.to_string(),
            reference: e.reference.to_string(),
            severity: Some(e.severity),
            applicability: Some(e.applicability),
        })
        .collect();
    Catalog::new(BUILTIN_CATALOG_NAME, items)
}
