//! Built-in types with a fixed JSON shape.

use std::collections::HashMap;

/// JSON shape of a known type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownType {
    Boolean,
    WholeNumber,
    Number,
    String,
    Object,
    Array,
}

impl KnownType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::WholeNumber => "wholeNumber",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// How date-like types are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateShape {
    /// Milliseconds since the epoch.
    #[default]
    Timestamp,
    String,
    Object,
}

impl DateShape {
    pub fn known_type(self) -> KnownType {
        match self {
            Self::Timestamp => KnownType::WholeNumber,
            Self::String => KnownType::String,
            Self::Object => KnownType::Object,
        }
    }
}

#[derive(Clone, Copy)]
enum Entry {
    Fixed(KnownType),
    Date,
}

use Entry::{Date, Fixed};
use KnownType::{Array, Boolean, Number, Object, String as Str, WholeNumber};

const JACKSON_NODE: &str = "com.fasterxml.jackson.databind.node";

static TABLE: &[(&str, Entry)] = &[
    // Boxed and primitive scalars
    ("java.lang.Boolean", Fixed(Boolean)),
    ("java.lang.Byte", Fixed(WholeNumber)),
    ("java.lang.Character", Fixed(Str)),
    ("java.lang.Double", Fixed(Number)),
    ("java.lang.Float", Fixed(Number)),
    ("java.lang.Integer", Fixed(WholeNumber)),
    ("java.lang.Long", Fixed(WholeNumber)),
    ("java.lang.Short", Fixed(WholeNumber)),
    ("boolean", Fixed(Boolean)),
    ("byte", Fixed(WholeNumber)),
    ("double", Fixed(Number)),
    ("float", Fixed(Number)),
    ("int", Fixed(WholeNumber)),
    ("long", Fixed(WholeNumber)),
    ("short", Fixed(WholeNumber)),
    ("char", Fixed(Str)),
    // Library scalars
    ("java.lang.String", Fixed(Str)),
    ("java.lang.Enum", Fixed(Str)),
    ("javax.xml.namespace.QName", Fixed(Str)),
    ("java.math.BigInteger", Fixed(WholeNumber)),
    ("java.math.BigDecimal", Fixed(Number)),
    ("java.util.Calendar", Date),
    ("java.util.Date", Date),
    ("java.sql.Timestamp", Date),
    ("java.net.URI", Fixed(Str)),
    ("java.net.URL", Fixed(Str)),
    ("java.lang.Object", Fixed(Object)),
    ("javax.activation.DataHandler", Fixed(Str)),
    ("java.util.UUID", Fixed(Str)),
    ("javax.xml.datatype.XMLGregorianCalendar", Date),
    ("java.util.GregorianCalendar", Date),
    ("java.lang.Class", Fixed(Object)),
    ("com.fasterxml.jackson.databind.JsonNode", Fixed(Object)),
    // java.time and Joda
    ("java.time.Period", Fixed(Str)),
    ("java.time.Duration", Date),
    ("java.time.Instant", Date),
    ("java.time.Year", Date),
    ("java.time.YearMonth", Fixed(Str)),
    ("java.time.MonthDay", Fixed(Str)),
    ("java.time.ZoneId", Fixed(Str)),
    ("java.time.ZoneOffset", Fixed(Str)),
    ("java.time.LocalDate", Fixed(Str)),
    ("java.time.LocalTime", Fixed(Str)),
    ("java.time.LocalDateTime", Fixed(Str)),
    ("java.time.OffsetTime", Fixed(Str)),
    ("java.time.ZonedDateTime", Date),
    ("java.time.OffsetDateTime", Date),
    ("org.joda.time.DateTime", Date),
];

/// JSON tree node types, relative to the node package.
static NODES: &[(&str, KnownType)] = &[
    ("ContainerNode", Object),
    ("ArrayNode", Array),
    ("ObjectNode", Object),
    ("ValueNode", Str),
    ("TextNode", Str),
    ("BinaryNode", Str),
    ("MissingNode", Str),
    ("NullNode", Str),
    ("NumericNode", WholeNumber),
    ("IntNode", WholeNumber),
    ("ShortNode", WholeNumber),
    ("FloatNode", Number),
    ("DoubleNode", Number),
    ("DecimalNode", Number),
    ("LongNode", WholeNumber),
    ("BigIntegerNode", WholeNumber),
    ("POJONode", Object),
    ("BooleanNode", Boolean),
];

/// Lookup table from qualified name to known JSON shape.
///
/// Built once per run; the configured [`DateShape`] applies to every
/// date-like entry.
#[derive(Debug, Clone)]
pub struct KnownTypes {
    table: HashMap<String, KnownType>,
}

impl KnownTypes {
    pub fn new(date_shape: DateShape) -> Self {
        let date = date_shape.known_type();
        let scalars = TABLE.iter().map(|&(name, entry)| {
            let ty = match entry {
                Fixed(ty) => ty,
                Date => date,
            };
            (name.to_string(), ty)
        });
        let nodes = NODES
            .iter()
            .map(|&(name, ty)| (format!("{JACKSON_NODE}.{name}"), ty));
        let table = scalars.chain(nodes).collect();
        Self { table }
    }

    pub fn classify(&self, qualified_name: &str) -> Option<KnownType> {
        self.table.get(qualified_name).copied()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.table.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for KnownTypes {
    fn default() -> Self {
        Self::new(DateShape::default())
    }
}
