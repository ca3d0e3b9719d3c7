//! Embedded snapshot of the FSSAI additive table.
//!
//! Based on the FSS (Food Products Standards and Food Additives)
//! Regulations, 2011, Appendix A, and FSSAI ban orders through 2025.

use lens_core::RegulatoryStatus;

pub(crate) struct Entry {
    pub code: &'static str,
    pub name: &'static str,
    pub status: RegulatoryStatus,
    pub category: &'static str,
    pub max_limit: &'static str,
    pub health_concern: &'static str,
    pub regulator_note: &'static str,
    pub severity: u8,
}

pub(crate) const ENTRIES: &[Entry] = &[
    Entry {
        code: "E924",
        name: "Potassium Bromate",
        status: RegulatoryStatus::Banned,
        category: "flour treatment agent",
        max_limit: "0 (banned)",
        health_concern: "Classified as possible human carcinogen (IARC Group 2B). Linked to kidney and thyroid cancer. Banned by FSSAI in 2016.",
        regulator_note: "Removed from list of permitted additives by FSSAI order dated 20 June 2016. Was previously used in bread and bakery products.",
        severity: 5,
    },
    Entry {
        code: "E924B",
        name: "Calcium Bromate",
        status: RegulatoryStatus::Banned,
        category: "flour treatment agent",
        max_limit: "0 (banned)",
        health_concern: "Similar carcinogenic concerns as Potassium Bromate.",
        regulator_note: "Banned along with Potassium Bromate in 2016.",
        severity: 5,
    },
    Entry {
        code: "E917",
        name: "Potassium Iodate",
        status: RegulatoryStatus::Banned,
        category: "flour treatment agent",
        max_limit: "0 (banned in bread)",
        health_concern: "Excess iodine intake can cause thyroid disorders. CSE study found residues in 84% of tested bread brands.",
        regulator_note: "Banned as bread additive by FSSAI in 2016. Still permitted for salt iodization under separate regulations.",
        severity: 4,
    },
    Entry {
        code: "E102",
        name: "Tartrazine (Yellow)",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "May cause hyperactivity in children. Can trigger allergic reactions, especially in aspirin-sensitive individuals.",
        regulator_note: "Permitted synthetic colour. Must be declared on label. Limited to 100 ppm in most food categories.",
        severity: 3,
    },
    Entry {
        code: "E110",
        name: "Sunset Yellow FCF",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "Linked to hyperactivity in children. EU requires warning label. May cause allergic reactions.",
        regulator_note: "Permitted synthetic colour in India. Max 100 ppm.",
        severity: 3,
    },
    Entry {
        code: "E122",
        name: "Carmoisine (Azorubine)",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "Azo dye linked to hyperactivity in children. May cause allergic reactions.",
        regulator_note: "One of 8 FSSAI-permitted synthetic colours.",
        severity: 3,
    },
    Entry {
        code: "E124",
        name: "Ponceau 4R",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "Azo dye. Linked to hyperactivity. Banned in USA and Norway.",
        regulator_note: "Permitted in India but banned in several countries. Max 100 ppm.",
        severity: 3,
    },
    Entry {
        code: "E127",
        name: "Erythrosine",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "Contains iodine. High doses may affect thyroid function.",
        regulator_note: "Permitted synthetic colour. Restricted to specific food categories.",
        severity: 3,
    },
    Entry {
        code: "E129",
        name: "Allura Red AC",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "Linked to hyperactivity in children. Some studies suggest genotoxicity.",
        regulator_note: "Permitted synthetic colour in India. Max 100 ppm.",
        severity: 3,
    },
    Entry {
        code: "E132",
        name: "Indigotine (Indigo Carmine)",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "May cause nausea and high blood pressure in sensitive individuals.",
        regulator_note: "Permitted synthetic colour. Max 100 ppm.",
        severity: 2,
    },
    Entry {
        code: "E133",
        name: "Brilliant Blue FCF",
        status: RegulatoryStatus::Restricted,
        category: "synthetic colour",
        max_limit: "100 ppm",
        health_concern: "Generally well tolerated. Rare allergic reactions reported.",
        regulator_note: "Permitted synthetic colour. Max 100 ppm.",
        severity: 1,
    },
    Entry {
        code: "E142",
        name: "Green S",
        status: RegulatoryStatus::Banned,
        category: "synthetic colour",
        max_limit: "0 (not permitted)",
        health_concern: "Not approved by FSSAI. Banned synthetic colour in India.",
        regulator_note: "Not in FSSAI list of 8 permitted synthetic colours.",
        severity: 4,
    },
    Entry {
        code: "E100",
        name: "Curcumin (Turmeric)",
        status: RegulatoryStatus::Permitted,
        category: "natural colour",
        max_limit: "GMP",
        health_concern: "Natural colour from turmeric. Generally safe. Traditional Indian ingredient.",
        regulator_note: "Natural colour, permitted at GMP levels.",
        severity: 0,
    },
    Entry {
        code: "E160A",
        name: "Beta-Carotene",
        status: RegulatoryStatus::Permitted,
        category: "natural colour",
        max_limit: "GMP",
        health_concern: "Natural pigment found in carrots. Safe at food levels.",
        regulator_note: "Permitted natural colour.",
        severity: 0,
    },
    Entry {
        code: "E150D",
        name: "Caramel Colour (Class IV - Sulphite Ammonia)",
        status: RegulatoryStatus::Restricted,
        category: "colour",
        max_limit: "varies by food category",
        health_concern: "Contains 4-methylimidazole (4-MEI), classified as possibly carcinogenic. Found in colas and dark beverages.",
        regulator_note: "Permitted but classified separately from natural caramel. Used in carbonated beverages.",
        severity: 3,
    },
    Entry {
        code: "E200",
        name: "Sorbic Acid",
        status: RegulatoryStatus::Permitted,
        category: "preservative (Class II)",
        max_limit: "1000 ppm (varies)",
        health_concern: "Generally safe. One of the safest preservatives available.",
        regulator_note: "Class II preservative. Permitted in various food categories up to 1000 ppm.",
        severity: 0,
    },
    Entry {
        code: "E202",
        name: "Potassium Sorbate",
        status: RegulatoryStatus::Permitted,
        category: "preservative (Class II)",
        max_limit: "1000 ppm (varies)",
        health_concern: "Salt of sorbic acid. Generally safe.",
        regulator_note: "Class II preservative. Widely permitted.",
        severity: 0,
    },
    Entry {
        code: "E210",
        name: "Benzoic Acid",
        status: RegulatoryStatus::Restricted,
        category: "preservative (Class II)",
        max_limit: "300 ppm",
        health_concern: "Can form benzene (a carcinogen) when combined with Vitamin C (ascorbic acid). FSSAI limits to 300 ppm.",
        regulator_note: "Class II preservative. Max 300 ppm. Caution with vitamin C containing products.",
        severity: 3,
    },
    Entry {
        code: "E211",
        name: "Sodium Benzoate",
        status: RegulatoryStatus::Restricted,
        category: "preservative (Class II)",
        max_limit: "300 ppm",
        health_concern: "Can form benzene with vitamin C. Linked to hyperactivity in children when combined with artificial colours.",
        regulator_note: "Class II preservative. Max 300 ppm. Widely used in beverages and sauces.",
        severity: 3,
    },
    Entry {
        code: "E220",
        name: "Sulphur Dioxide",
        status: RegulatoryStatus::Restricted,
        category: "preservative (Class II)",
        max_limit: "varies (70-350 ppm)",
        health_concern: "Can trigger severe asthma attacks. Must be declared on label. Destroys vitamin B1.",
        regulator_note: "Class II preservative. Mandatory labelling if >10 ppm. Used in dried fruits, wine, pickles.",
        severity: 3,
    },
    Entry {
        code: "E223",
        name: "Sodium Metabisulphite",
        status: RegulatoryStatus::Restricted,
        category: "preservative (Class II)",
        max_limit: "varies by product",
        health_concern: "Sulphite - can trigger asthma and allergic reactions. Must be declared as allergen.",
        regulator_note: "Permitted as dough conditioner and preservative. Must be declared on label.",
        severity: 3,
    },
    Entry {
        code: "E250",
        name: "Sodium Nitrite",
        status: RegulatoryStatus::Restricted,
        category: "preservative",
        max_limit: "200 ppm (in meat products)",
        health_concern: "Can form nitrosamines (carcinogens) during cooking. Used in processed meats. IARC links processed meat to colorectal cancer.",
        regulator_note: "Permitted only in certain meat products. Strict limits apply.",
        severity: 4,
    },
    Entry {
        code: "E251",
        name: "Sodium Nitrate",
        status: RegulatoryStatus::Restricted,
        category: "preservative",
        max_limit: "500 ppm (in meat)",
        health_concern: "Converts to nitrite in the body. Same nitrosamine concerns as sodium nitrite.",
        regulator_note: "Permitted in meat products with limits.",
        severity: 3,
    },
    Entry {
        code: "E320",
        name: "BHA (Butylated Hydroxyanisole)",
        status: RegulatoryStatus::Restricted,
        category: "antioxidant",
        max_limit: "200 ppm",
        health_concern: "Classified as possibly carcinogenic (IARC Group 2B). Endocrine disruptor concerns.",
        regulator_note: "Permitted antioxidant. Max 200 ppm individually or combined with BHT.",
        severity: 4,
    },
    Entry {
        code: "E321",
        name: "BHT (Butylated Hydroxytoluene)",
        status: RegulatoryStatus::Restricted,
        category: "antioxidant",
        max_limit: "200 ppm",
        health_concern: "Possible endocrine disruptor. Some animal studies show tumour promotion.",
        regulator_note: "Permitted antioxidant. Max 200 ppm combined with BHA.",
        severity: 3,
    },
    Entry {
        code: "E319",
        name: "TBHQ (Tert-Butylhydroquinone)",
        status: RegulatoryStatus::Restricted,
        category: "antioxidant",
        max_limit: "200 ppm",
        health_concern: "High doses can cause nausea, delirium. Some studies suggest immune system effects.",
        regulator_note: "Permitted antioxidant. Max 200 ppm.",
        severity: 3,
    },
    Entry {
        code: "E300",
        name: "Ascorbic Acid (Vitamin C)",
        status: RegulatoryStatus::Permitted,
        category: "antioxidant",
        max_limit: "GMP",
        health_concern: "Safe. Essential nutrient (Vitamin C).",
        regulator_note: "Permitted antioxidant at GMP levels.",
        severity: 0,
    },
    Entry {
        code: "E306",
        name: "Tocopherol (Vitamin E)",
        status: RegulatoryStatus::Permitted,
        category: "antioxidant",
        max_limit: "GMP",
        health_concern: "Safe. Essential nutrient (Vitamin E).",
        regulator_note: "Permitted antioxidant at GMP levels.",
        severity: 0,
    },
    Entry {
        code: "E322",
        name: "Lecithin",
        status: RegulatoryStatus::Permitted,
        category: "emulsifier",
        max_limit: "GMP",
        health_concern: "Generally safe. Natural emulsifier from soy or eggs. Soy allergen risk.",
        regulator_note: "Permitted emulsifier at GMP. Must declare soy origin for allergen labelling.",
        severity: 1,
    },
    Entry {
        code: "E330",
        name: "Citric Acid",
        status: RegulatoryStatus::Permitted,
        category: "acidity regulator",
        max_limit: "GMP",
        health_concern: "Safe. Naturally found in citrus fruits.",
        regulator_note: "Permitted acidity regulator at GMP.",
        severity: 0,
    },
    Entry {
        code: "E412",
        name: "Guar Gum",
        status: RegulatoryStatus::Permitted,
        category: "thickener/stabilizer",
        max_limit: "GMP",
        health_concern: "Generally safe. May cause digestive discomfort in large amounts.",
        regulator_note: "Permitted thickener. India is the world's largest producer of guar gum.",
        severity: 0,
    },
    Entry {
        code: "E415",
        name: "Xanthan Gum",
        status: RegulatoryStatus::Permitted,
        category: "thickener/stabilizer",
        max_limit: "GMP",
        health_concern: "Generally safe. May cause bloating in large amounts.",
        regulator_note: "Permitted thickener at GMP.",
        severity: 0,
    },
    Entry {
        code: "E407",
        name: "Carrageenan",
        status: RegulatoryStatus::Permitted,
        category: "thickener/stabilizer",
        max_limit: "GMP",
        health_concern: "Some studies link to gut inflammation. Debated safety, but generally recognized as safe.",
        regulator_note: "Permitted stabilizer at GMP. Used in dairy products.",
        severity: 2,
    },
    Entry {
        code: "E471",
        name: "Mono- and Diglycerides of Fatty Acids",
        status: RegulatoryStatus::Permitted,
        category: "emulsifier",
        max_limit: "GMP",
        health_concern: "Generally safe. May be from animal or plant sources, vegetarian status unclear unless specified.",
        regulator_note: "Permitted emulsifier. FSSAI requires veg/non-veg declaration.",
        severity: 1,
    },
    Entry {
        code: "E621",
        name: "Monosodium Glutamate (MSG)",
        status: RegulatoryStatus::Restricted,
        category: "flavour enhancer",
        max_limit: "not specified (GMP in most categories)",
        health_concern: "May cause 'Chinese Restaurant Syndrome' (headache, flushing, sweating) in sensitive people. FSSAI restricts in infant food.",
        regulator_note: "Permitted in most food categories. Banned in infant food and food for young children. Must be declared on label.",
        severity: 2,
    },
    Entry {
        code: "E627",
        name: "Disodium Guanylate",
        status: RegulatoryStatus::Restricted,
        category: "flavour enhancer",
        max_limit: "GMP",
        health_concern: "Should be avoided by gout sufferers (purine metabolism). Often used with MSG.",
        regulator_note: "Permitted flavour enhancer. Not for infant food.",
        severity: 2,
    },
    Entry {
        code: "E631",
        name: "Disodium Inosinate",
        status: RegulatoryStatus::Restricted,
        category: "flavour enhancer",
        max_limit: "GMP",
        health_concern: "Avoid if gout-prone. Often combined with MSG and E627.",
        regulator_note: "Permitted flavour enhancer. Not for infant food.",
        severity: 2,
    },
    Entry {
        code: "E500",
        name: "Sodium Bicarbonate (Baking Soda)",
        status: RegulatoryStatus::Permitted,
        category: "raising agent",
        max_limit: "GMP",
        health_concern: "Safe. Common household ingredient.",
        regulator_note: "Permitted raising agent at GMP.",
        severity: 0,
    },
    Entry {
        code: "E501",
        name: "Potassium Carbonate",
        status: RegulatoryStatus::Permitted,
        category: "raising agent",
        max_limit: "GMP",
        health_concern: "Safe. Used in baking.",
        regulator_note: "Permitted raising agent at GMP.",
        severity: 0,
    },
    Entry {
        code: "E503",
        name: "Ammonium Carbonate",
        status: RegulatoryStatus::Permitted,
        category: "raising agent",
        max_limit: "GMP",
        health_concern: "Safe. Evaporates during baking.",
        regulator_note: "Permitted raising agent at GMP.",
        severity: 0,
    },
    Entry {
        code: "E951",
        name: "Aspartame",
        status: RegulatoryStatus::Restricted,
        category: "artificial sweetener",
        max_limit: "varies by product",
        health_concern: "WHO/IARC classified as possibly carcinogenic (Group 2B) in 2023. Phenylketonuria (PKU) patients must avoid.",
        regulator_note: "Permitted in sugar-free products. Must carry PKU warning. FSSAI monitoring post-IARC classification.",
        severity: 3,
    },
    Entry {
        code: "E950",
        name: "Acesulfame Potassium (Ace-K)",
        status: RegulatoryStatus::Restricted,
        category: "artificial sweetener",
        max_limit: "varies by product",
        health_concern: "Some studies suggest it may affect gut microbiome. Generally considered safe at permitted levels.",
        regulator_note: "Permitted artificial sweetener.",
        severity: 2,
    },
    Entry {
        code: "E955",
        name: "Sucralose",
        status: RegulatoryStatus::Permitted,
        category: "artificial sweetener",
        max_limit: "varies by product",
        health_concern: "Generally considered safe. Some concerns about effects when heated.",
        regulator_note: "Permitted artificial sweetener.",
        severity: 1,
    },
    Entry {
        code: "E338",
        name: "Phosphoric Acid",
        status: RegulatoryStatus::Restricted,
        category: "acidity regulator",
        max_limit: "varies by product",
        health_concern: "High intake may reduce calcium absorption and affect bone density. Common in colas.",
        regulator_note: "Permitted acidity regulator. Primary use in carbonated beverages.",
        severity: 2,
    },
    Entry {
        code: "E451",
        name: "Triphosphate (Pentasodium/Pentapotassium)",
        status: RegulatoryStatus::Restricted,
        category: "emulsifier/stabilizer",
        max_limit: "varies by product",
        health_concern: "Excessive phosphate intake linked to cardiovascular and kidney issues.",
        regulator_note: "Permitted with limits. Used in processed meat and noodles.",
        severity: 2,
    },
];
