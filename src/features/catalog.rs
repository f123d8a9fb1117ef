// Base metric catalog for the generated feature-name tables.
//
// This file is shared verbatim by `build.rs` (via `include!`) and by the
// library, so it must stay free of `use` items and crate paths.

/// Static-analysis metrics reported at file level.
pub const STATIC_FILE: &[&str] = &[
    "McCC", "PDA", "PUA", "LOC", "LLOC",
];

/// Static-analysis metrics aggregated over the classes of a file.
pub const STATIC_CLASS: &[&str] = &[
    "LCOM5", "NL", "NLE", "WMC", "CBO", "CBOI", "NII", "NOI", "RFC", "AD",
    "CD", "CLOC", "DLOC", "PDA", "PUA", "TCD", "TCLOC", "DIT", "NOA", "NOC",
    "NOD", "NOP", "LOC", "LLOC", "NA", "NG", "NLA", "NLG", "NLM", "NLPA",
    "NLPM", "NLS", "NM", "NPA", "NPM", "NS", "NOS", "TLOC", "TLLOC", "TNA",
    "TNG", "TNLA", "TNLG", "TNLM", "TNLPA", "TNLPM", "TNLS", "TNM", "TNPA",
    "TNPM", "TNS", "TNOS", "LDC", "CCL", "CI", "CC", "LLDC", "CCO", "CLC",
    "CLLC",
];

/// Static-analysis metrics aggregated over the interfaces of a file.
pub const STATIC_INTERFACE: &[&str] = &[
    "LCOM5", "NL", "NLE", "WMC", "CBO", "CBOI", "NII", "NOI", "RFC", "AD",
    "CD", "CLOC", "DLOC", "PDA", "PUA", "TCD", "TCLOC", "DIT", "NOA", "NOC",
    "NOD", "NOP", "LOC", "LLOC", "NA", "NG", "NLA", "NLG", "NLM", "NLPA",
    "NLPM", "NLS", "NM", "NPA", "NPM", "NS", "NOS", "TLOC", "TLLOC", "TNA",
    "TNG", "TNLA", "TNLG", "TNLM", "TNLPA", "TNLPM", "TNLS", "TNM", "TNPA",
    "TNPM", "TNS", "TNOS",
];

/// Static-analysis metrics aggregated over the enums of a file.
pub const STATIC_ENUM: &[&str] = &[
    "LCOM5", "NL", "NLE", "WMC", "CBO", "CBOI", "NII", "NOI", "RFC", "AD",
    "CD", "CLOC", "DLOC", "PDA", "PUA", "TCD", "TCLOC", "DIT", "NOA", "NOC",
    "NOD", "NOP", "LOC", "LLOC", "NA", "NG", "NLA", "NLG", "NLM", "NLPA",
    "NLPM", "NLS", "NM", "NPA", "NPM", "NS", "NOS", "TLOC", "TLLOC", "TNA",
    "TNG", "TNLA", "TNLG", "TNLM", "TNLPA", "TNLPM", "TNLS", "TNM", "TNPA",
    "TNPM", "TNS", "TNOS",
];

/// Static-analysis metrics aggregated over the methods of a file.
pub const STATIC_METHOD: &[&str] = &[
    "MIMS", "MI", "MISEI", "MISM", "McCC", "NL", "NLE", "NII", "NOI", "CD",
    "CLOC", "DLOC", "TCD", "TCLOC", "LOC", "LLOC", "NUMPAR", "NOS", "TLOC",
    "TLLOC", "TNOS", "LDC", "CCL", "CI", "HPV", "CC", "LLDC", "CCO", "CLC",
    "CLLC",
];

/// Aggregations applied to class, interface, enum and method metrics.
pub const STATIC_AGGREGATIONS: &[&str] = &[
    "min", "max", "avg", "median", "sum",
];

/// Fine-grained just-in-time features.
pub const FGJIT: &[&str] = &[
    "comm", "adev", "ddev", "nddev", "add", "del", "own", "minor", "sctr",
    "nadev", "ncomm", "nsctr", "oexp", "exp", "nd", "entropy", "la", "ld",
    "lt", "age", "nuc", "cexp", "sexp", "rexp", "fix_bug",
];

/// Kamei et al. just-in-time features.
pub const JIT: &[&str] = &[
    "kamei_ns", "kamei_nd", "kamei_nf", "kamei_entropy", "kamei_la",
    "kamei_ld", "kamei_lt", "kamei_fix", "kamei_ndev", "kamei_age",
    "kamei_nuc", "kamei_exp", "kamei_sexp", "kamei_rexp",
];

/// Warning-density features.
pub const WD: &[&str] = &[
    "sm_current_WD", "sm_parent_WD", "sm_delta_WD", "sm_system_WD",
    "sm_parent_system_WD",
];

/// Severity PMD assigns to a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PmdSeverity {
    /// Minor
    Minor,
    /// Major
    Major,
    /// Critical
    Critical,
}

/// One entry of the PMD rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PmdRule {
    /// Rule category, e.g. "Basic Rules"
    pub category: &'static str,
    /// Human readable rule name
    pub rule: &'static str,
    /// Column abbreviation, e.g. "PMD_ECB"
    pub abbrev: &'static str,
    /// Severity
    pub severity: PmdSeverity,
}

const fn pmd(
    category: &'static str,
    rule: &'static str,
    abbrev: &'static str,
    severity: PmdSeverity,
) -> PmdRule {
    PmdRule {
        category,
        rule,
        abbrev,
        severity,
    }
}

/// PMD rules whose hit counts appear as `current_`, `parent_` and `delta_` columns.
pub const PMD_RULES: &[PmdRule] = &[
    pmd("Basic Rules", "Avoid Branching Statement As Last In Loop", "PMD_ABSALIL", PmdSeverity::Major),
    pmd("Basic Rules", "Avoid Decimal Literals In Big Decimal Constructor", "PMD_ADLIBDC", PmdSeverity::Critical),
    pmd("Basic Rules", "Avoid Multiple Unary Operators", "PMD_AMUO", PmdSeverity::Major),
    pmd("Basic Rules", "Avoid Thread Group", "PMD_ATG", PmdSeverity::Critical),
    pmd("Basic Rules", "Avoid Using Hard Coded IP", "PMD_AUHCIP", PmdSeverity::Major),
    pmd("Basic Rules", "Avoid Using Octal Values", "PMD_AUOV", PmdSeverity::Critical),
    pmd("Basic Rules", "Big Integer Instantiation", "PMD_BII", PmdSeverity::Minor),
    pmd("Basic Rules", "Boolean Instantiation", "PMD_BI", PmdSeverity::Minor),
    pmd("Basic Rules", "Broken Null Check", "PMD_BNC", PmdSeverity::Critical),
    pmd("Basic Rules", "Check Result Set", "PMD_CRS", PmdSeverity::Critical),
    pmd("Basic Rules", "Check Skip Result", "PMD_CSR", PmdSeverity::Critical),
    pmd("Basic Rules", "Class Cast Exception With To Array", "PMD_CCEWTA", PmdSeverity::Critical),
    pmd("Basic Rules", "Collapsible If Statements", "PMD_CIS", PmdSeverity::Minor),
    pmd("Basic Rules", "Dont Call Thread Run", "PMD_DCTR", PmdSeverity::Critical),
    pmd("Basic Rules", "Dont Use Float Type For Loop Indices", "PMD_DUFTFLI", PmdSeverity::Critical),
    pmd("Basic Rules", "Double Checked Locking", "PMD_DCL", PmdSeverity::Critical),
    pmd("Basic Rules", "Empty Catch Block", "PMD_ECB", PmdSeverity::Critical),
    pmd("Basic Rules", "Empty Finally Block", "PMD_EFB", PmdSeverity::Minor),
    pmd("Basic Rules", "Empty If Stmt", "PMD_EIS", PmdSeverity::Major),
    pmd("Basic Rules", "Empty Statement Block", "PMD_EmSB", PmdSeverity::Minor),
    pmd("Basic Rules", "Empty Statement Not In Loop", "PMD_ESNIL", PmdSeverity::Minor),
    pmd("Basic Rules", "Empty Static Initializer", "PMD_ESI", PmdSeverity::Minor),
    pmd("Basic Rules", "Empty Switch Statements", "PMD_ESS", PmdSeverity::Major),
    pmd("Basic Rules", "Empty Synchronized Block", "PMD_ESB", PmdSeverity::Major),
    pmd("Basic Rules", "Empty Try Block", "PMD_ETB", PmdSeverity::Major),
    pmd("Basic Rules", "Empty While Stmt", "PMD_EWS", PmdSeverity::Critical),
    pmd("Basic Rules", "Extends Object", "PMD_EO", PmdSeverity::Minor),
    pmd("Basic Rules", "For Loop Should Be While Loop", "PMD_FLSBWL", PmdSeverity::Minor),
    pmd("Basic Rules", "Jumbled Incrementer", "PMD_JI", PmdSeverity::Critical),
    pmd("Basic Rules", "Misplaced Null Check", "PMD_MNC", PmdSeverity::Critical),
    pmd("Basic Rules", "Override Both Equals And Hashcode", "PMD_OBEAH", PmdSeverity::Critical),
    pmd("Basic Rules", "Return From Finally Block", "PMD_RFFB", PmdSeverity::Critical),
    pmd("Basic Rules", "Unconditional If Statement", "PMD_UIS", PmdSeverity::Major),
    pmd("Basic Rules", "Unnecessary Conversion Temporary", "PMD_UCT", PmdSeverity::Minor),
    pmd("Basic Rules", "Unused Null Check In Equals", "PMD_UNCIE", PmdSeverity::Critical),
    pmd("Basic Rules", "Useless Operation On Immutable", "PMD_UOOI", PmdSeverity::Critical),
    pmd("Basic Rules", "Useless Overriding Method", "PMD_UOM", PmdSeverity::Minor),
    pmd("Brace Rules", "For Loops Must Use Braces", "PMD_FLMUB", PmdSeverity::Minor),
    pmd("Brace Rules", "If Else Stmts Must Use Braces", "PMD_IESMUB", PmdSeverity::Minor),
    pmd("Brace Rules", "If Stmts Must Use Braces", "PMD_ISMUB", PmdSeverity::Minor),
    pmd("Brace Rules", "While Loops Must Use Braces", "PMD_WLMUB", PmdSeverity::Minor),
    pmd("Clone Implementation Rules", "Clone Throws Clone Not Supported Exception", "PMD_CTCNSE", PmdSeverity::Major),
    pmd("Clone Implementation Rules", "Proper Clone Implementation", "PMD_PCI", PmdSeverity::Critical),
    pmd("Controversial Rules", "Assignment In Operand", "PMD_AIO", PmdSeverity::Minor),
    pmd("Controversial Rules", "Avoid Accessibility Alteration", "PMD_AAA", PmdSeverity::Major),
    pmd("Controversial Rules", "Avoid Prefixing Method Parameters", "PMD_APMP", PmdSeverity::Minor),
    pmd("Controversial Rules", "Avoid Using Native Code", "PMD_AUNC", PmdSeverity::Major),
    pmd("Controversial Rules", "Default Package", "PMD_DP", PmdSeverity::Minor),
    pmd("Controversial Rules", "Do Not Call Garbage Collection Explicitly", "PMD_DNCGCE", PmdSeverity::Major),
    pmd("Controversial Rules", "Dont Import Sun", "PMD_DIS", PmdSeverity::Major),
    pmd("Controversial Rules", "One Declaration Per Line", "PMD_ODPL", PmdSeverity::Minor),
    pmd("Controversial Rules", "Suspicious Octal Escape", "PMD_SOE", PmdSeverity::Major),
    pmd("Controversial Rules", "Unnecessary Constructor", "PMD_UC", PmdSeverity::Minor),
    pmd("Design Rules", "Abstract Class Without Abstract Method", "PMD_ACWAM", PmdSeverity::Minor),
    pmd("Design Rules", "Abstract Class Without Any Method", "PMD_AbCWAM", PmdSeverity::Minor),
    pmd("Design Rules", "Assignment To Non Final Static", "PMD_ATNFS", PmdSeverity::Critical),
    pmd("Design Rules", "Avoid Constants Interface", "PMD_ACI", PmdSeverity::Minor),
    pmd("Design Rules", "Avoid Instanceof Checks In Catch Clause", "PMD_AICICC", PmdSeverity::Major),
    pmd("Design Rules", "Avoid Protected Field In Final Class", "PMD_APFIFC", PmdSeverity::Minor),
    pmd("Design Rules", "Avoid Protected Method In Final Class Not Extending", "PMD_APMIFCNE", PmdSeverity::Minor),
    pmd("Design Rules", "Avoid Reassigning Parameters", "PMD_ARP", PmdSeverity::Minor),
    pmd("Design Rules", "Avoid Synchronized At Method Level", "PMD_ASAML", PmdSeverity::Minor),
    pmd("Design Rules", "Bad Comparison", "PMD_BC", PmdSeverity::Critical),
    pmd("Design Rules", "Class With Only Private Constructors Should Be Final", "PMD_CWOPCSBF", PmdSeverity::Minor),
    pmd("Design Rules", "Close Resource", "PMD_ClR", PmdSeverity::Critical),
    pmd("Design Rules", "Constructor Calls Overridable Method", "PMD_CCOM", PmdSeverity::Critical),
    pmd("Design Rules", "Default Label Not Last In Switch Stmt", "PMD_DLNLISS", PmdSeverity::Minor),
    pmd("Design Rules", "Empty Method In Abstract Class Should Be Abstract", "PMD_EMIACSBA", PmdSeverity::Major),
    pmd("Design Rules", "Equals Null", "PMD_EN", PmdSeverity::Critical),
    pmd("Design Rules", "Field Declarations Should Be At Start Of Class", "PMD_FDSBASOC", PmdSeverity::Minor),
    pmd("Design Rules", "Final Field Could Be Static", "PMD_FFCBS", PmdSeverity::Minor),
    pmd("Design Rules", "Idempotent Operations", "PMD_IO", PmdSeverity::Major),
    pmd("Design Rules", "Immutable Field", "PMD_IF", PmdSeverity::Minor),
    pmd("Design Rules", "Instantiation To Get Class", "PMD_ITGC", PmdSeverity::Major),
    pmd("Design Rules", "Logic Inversion", "PMD_LI", PmdSeverity::Minor),
    pmd("Design Rules", "Missing Break In Switch", "PMD_MBIS", PmdSeverity::Critical),
    pmd("Design Rules", "Missing Static Method In Non Instantiatable Class", "PMD_MSMINIC", PmdSeverity::Minor),
    pmd("Design Rules", "Non Case Label In Switch Statement", "PMD_NCLISS", PmdSeverity::Critical),
    pmd("Design Rules", "Non Static Initializer", "PMD_NSI", PmdSeverity::Critical),
    pmd("Design Rules", "Non Thread Safe Singleton", "PMD_NTSS", PmdSeverity::Critical),
    pmd("Design Rules", "Optimizable To Array Call", "PMD_OTAC", PmdSeverity::Major),
    pmd("Design Rules", "Position Literals First In Case Insensitive Comparisons", "PMD_PLFICIC", PmdSeverity::Critical),
    pmd("Design Rules", "Position Literals First In Comparisons", "PMD_PLFIC", PmdSeverity::Critical),
    pmd("Design Rules", "Preserve Stack Trace", "PMD_PST", PmdSeverity::Major),
    pmd("Design Rules", "Return Empty Array Rather Than Null", "PMD_REARTN", PmdSeverity::Major),
    pmd("Design Rules", "Simple Date Format Needs Locale", "PMD_SDFNL", PmdSeverity::Minor),
    pmd("Design Rules", "Simplify Boolean Expressions", "PMD_SBE", PmdSeverity::Minor),
    pmd("Design Rules", "Simplify Boolean Returns", "PMD_SBR", PmdSeverity::Minor),
    pmd("Design Rules", "Simplify Conditional", "PMD_SC", PmdSeverity::Minor),
    pmd("Design Rules", "Singular Field", "PMD_SF", PmdSeverity::Major),
    pmd("Design Rules", "Switch Stmts Should Have Default", "PMD_SSSHD", PmdSeverity::Major),
    pmd("Design Rules", "Too Few Branches For ASwitch Statement", "PMD_TFBFASS", PmdSeverity::Minor),
    pmd("Design Rules", "Uncommented Empty Constructor", "PMD_UEC", PmdSeverity::Minor),
    pmd("Design Rules", "Uncommented Empty Method", "PMD_UEM", PmdSeverity::Minor),
    pmd("Design Rules", "Unnecessary Local Before Return", "PMD_ULBR", PmdSeverity::Minor),
    pmd("Design Rules", "Unsynchronized Static Date Formatter", "PMD_USDF", PmdSeverity::Critical),
    pmd("Design Rules", "Use Collection Is Empty", "PMD_UCIE", PmdSeverity::Major),
    pmd("Design Rules", "Use Locale With Case Conversions", "PMD_ULWCC", PmdSeverity::Critical),
    pmd("Design Rules", "Use Notify All Instead Of Notify", "PMD_UNAION", PmdSeverity::Critical),
    pmd("Design Rules", "Use Varargs", "PMD_UV", PmdSeverity::Minor),
    pmd("Finalizer Rules", "Avoid Calling Finalize", "PMD_ACF", PmdSeverity::Major),
    pmd("Finalizer Rules", "Empty Finalizer", "PMD_EF", PmdSeverity::Minor),
    pmd("Finalizer Rules", "Finalize Does Not Call Super Finalize", "PMD_FDNCSF", PmdSeverity::Critical),
    pmd("Finalizer Rules", "Finalize Only Calls Super Finalize", "PMD_FOCSF", PmdSeverity::Minor),
    pmd("Finalizer Rules", "Finalize Overloaded", "PMD_FO", PmdSeverity::Critical),
    pmd("Finalizer Rules", "Finalize Should Be Protected", "PMD_FSBP", PmdSeverity::Critical),
    pmd("Import Statement Rules", "Dont Import Java Lang", "PMD_DIJL", PmdSeverity::Minor),
    pmd("Import Statement Rules", "Duplicate Imports", "PMD_DI", PmdSeverity::Minor),
    pmd("Import Statement Rules", "Import From Same Package", "PMD_IFSP", PmdSeverity::Minor),
    pmd("Import Statement Rules", "Too Many Static Imports", "PMD_TMSI", PmdSeverity::Major),
    pmd("Import Statement Rules", "Unnecessary Fully Qualified Name", "PMD_UFQN", PmdSeverity::Minor),
    pmd("J2EE Rules", "Do Not Call System Exit", "PMD_DNCSE", PmdSeverity::Critical),
    pmd("J2EE Rules", "Local Home Naming Convention", "PMD_LHNC", PmdSeverity::Major),
    pmd("J2EE Rules", "Local Interface Session Naming Convention", "PMD_LISNC", PmdSeverity::Major),
    pmd("J2EE Rules", "MDBAnd Session Bean Naming Convention", "PMD_MDBASBNC", PmdSeverity::Major),
    pmd("J2EE Rules", "Remote Interface Naming Convention", "PMD_RINC", PmdSeverity::Major),
    pmd("J2EE Rules", "Remote Session Interface Naming Convention", "PMD_RSINC", PmdSeverity::Major),
    pmd("J2EE Rules", "Static EJBField Should Be Final", "PMD_SEJBFSBF", PmdSeverity::Critical),
    pmd("JUnit Rules", "JUnit Assertions Should Include Message", "PMD_JUASIM", PmdSeverity::Minor),
    pmd("JUnit Rules", "JUnit Spelling", "PMD_JUS", PmdSeverity::Critical),
    pmd("JUnit Rules", "JUnit Static Suite", "PMD_JUSS", PmdSeverity::Critical),
    pmd("JUnit Rules", "JUnit Test Contains Too Many Asserts", "PMD_JUTCTMA", PmdSeverity::Minor),
    pmd("JUnit Rules", "JUnit Tests Should Include Assert", "PMD_JUTSIA", PmdSeverity::Major),
    pmd("JUnit Rules", "Simplify Boolean Assertion", "PMD_SBA", PmdSeverity::Minor),
    pmd("JUnit Rules", "Test Class Without Test Cases", "PMD_TCWTC", PmdSeverity::Minor),
    pmd("JUnit Rules", "Unnecessary Boolean Assertion", "PMD_UBA", PmdSeverity::Minor),
    pmd("JUnit Rules", "Use Assert Equals Instead Of Assert True", "PMD_UAEIOAT", PmdSeverity::Major),
    pmd("JUnit Rules", "Use Assert Null Instead Of Assert True", "PMD_UANIOAT", PmdSeverity::Minor),
    pmd("JUnit Rules", "Use Assert Same Instead Of Assert True", "PMD_UASIOAT", PmdSeverity::Minor),
    pmd("JUnit Rules", "Use Assert True Instead Of Assert Equals", "PMD_UATIOAE", PmdSeverity::Minor),
    pmd("Jakarta Commons Logging Rules", "Guard Debug Logging", "PMD_GDL", PmdSeverity::Major),
    pmd("Jakarta Commons Logging Rules", "Guard Log Statement", "PMD_GLS", PmdSeverity::Minor),
    pmd("Jakarta Commons Logging Rules", "Proper Logger", "PMD_PL", PmdSeverity::Minor),
    pmd("Jakarta Commons Logging Rules", "Use Correct Exception Logging", "PMD_UCEL", PmdSeverity::Major),
    pmd("Java Logging Rules", "Avoid Print Stack Trace", "PMD_APST", PmdSeverity::Major),
    pmd("Java Logging Rules", "Guard Log Statement Java Util", "PMD_GLSJU", PmdSeverity::Minor),
    pmd("Java Logging Rules", "Logger Is Not Static Final", "PMD_LINSF", PmdSeverity::Minor),
    pmd("Java Logging Rules", "More Than One Logger", "PMD_MTOL", PmdSeverity::Major),
    pmd("Java Logging Rules", "System Println", "PMD_SP", PmdSeverity::Major),
    pmd("JavaBean Rules", "Missing Serial Version UID", "PMD_MSVUID", PmdSeverity::Major),
    pmd("Naming Rules", "Avoid Dollar Signs", "PMD_ADS", PmdSeverity::Minor),
    pmd("Naming Rules", "Avoid Field Name Matching Method Name", "PMD_AFNMMN", PmdSeverity::Minor),
    pmd("Naming Rules", "Avoid Field Name Matching Type Name", "PMD_AFNMTN", PmdSeverity::Minor),
    pmd("Naming Rules", "Boolean Get Method Name", "PMD_BGMN", PmdSeverity::Minor),
    pmd("Naming Rules", "Class Naming Conventions", "PMD_CNC", PmdSeverity::Minor),
    pmd("Naming Rules", "Generics Naming", "PMD_GN", PmdSeverity::Minor),
    pmd("Naming Rules", "Method Naming Conventions", "PMD_MeNC", PmdSeverity::Minor),
    pmd("Naming Rules", "Method With Same Name As Enclosing Class", "PMD_MWSNAEC", PmdSeverity::Minor),
    pmd("Naming Rules", "No Package", "PMD_NP", PmdSeverity::Minor),
    pmd("Naming Rules", "Package Case", "PMD_PC", PmdSeverity::Minor),
    pmd("Naming Rules", "Short Class Name", "PMD_SCN", PmdSeverity::Minor),
    pmd("Naming Rules", "Short Method Name", "PMD_SMN", PmdSeverity::Minor),
    pmd("Naming Rules", "Suspicious Constant Field Name", "PMD_SCFN", PmdSeverity::Minor),
    pmd("Naming Rules", "Suspicious Equals Method Name", "PMD_SEMN", PmdSeverity::Critical),
    pmd("Naming Rules", "Suspicious Hashcode Method Name", "PMD_SHMN", PmdSeverity::Critical),
    pmd("Naming Rules", "Variable Naming Conventions", "PMD_VNC", PmdSeverity::Minor),
    pmd("Optimization Rules", "Add Empty String", "PMD_AES", PmdSeverity::Minor),
    pmd("Optimization Rules", "Avoid Array Loops", "PMD_AAL", PmdSeverity::Major),
    pmd("Optimization Rules", "Redundant Field Initializer", "PMD_RFI", PmdSeverity::Minor),
    pmd("Optimization Rules", "Unnecessary Wrapper Object Creation", "PMD_UWOC", PmdSeverity::Major),
    pmd("Optimization Rules", "Use Array List Instead Of Vector", "PMD_UALIOV", PmdSeverity::Minor),
    pmd("Optimization Rules", "Use Arrays As List", "PMD_UAAL", PmdSeverity::Major),
    pmd("Optimization Rules", "Use String Buffer For String Appends", "PMD_USBFSA", PmdSeverity::Major),
    pmd("Security Code Guideline Rules", "Array Is Stored Directly", "PMD_AISD", PmdSeverity::Major),
    pmd("Security Code Guideline Rules", "Method Returns Internal Array", "PMD_MRIA", PmdSeverity::Major),
    pmd("Strict Exception Rules", "Avoid Catching Generic Exception", "PMD_ACGE", PmdSeverity::Major),
    pmd("Strict Exception Rules", "Avoid Catching NPE", "PMD_ACNPE", PmdSeverity::Critical),
    pmd("Strict Exception Rules", "Avoid Catching Throwable", "PMD_ACT", PmdSeverity::Major),
    pmd("Strict Exception Rules", "Avoid Losing Exception Information", "PMD_ALEI", PmdSeverity::Major),
    pmd("Strict Exception Rules", "Avoid Rethrowing Exception", "PMD_ARE", PmdSeverity::Minor),
    pmd("Strict Exception Rules", "Avoid Throwing New Instance Of Same Exception", "PMD_ATNIOSE", PmdSeverity::Minor),
    pmd("Strict Exception Rules", "Avoid Throwing Null Pointer Exception", "PMD_ATNPE", PmdSeverity::Critical),
    pmd("Strict Exception Rules", "Avoid Throwing Raw Exception Types", "PMD_ATRET", PmdSeverity::Major),
    pmd("Strict Exception Rules", "Do Not Extend Java Lang Error", "PMD_DNEJLE", PmdSeverity::Critical),
    pmd("Strict Exception Rules", "Do Not Throw Exception In Finally", "PMD_DNTEIF", PmdSeverity::Critical),
    pmd("Strict Exception Rules", "Exception As Flow Control", "PMD_EAFC", PmdSeverity::Major),
    pmd("String and StringBuffer Rules", "Avoid Duplicate Literals", "PMD_ADL", PmdSeverity::Major),
    pmd("String and StringBuffer Rules", "Avoid String Buffer Field", "PMD_ASBF", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "Consecutive Appends Should Reuse", "PMD_CASR", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "Consecutive Literal Appends", "PMD_CLA", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "Inefficient String Buffering", "PMD_ISB", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "String Buffer Instantiation With Char", "PMD_SBIWC", PmdSeverity::Critical),
    pmd("String and StringBuffer Rules", "String Instantiation", "PMD_StI", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "String To String", "PMD_STS", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "Unnecessary Case Change", "PMD_UCC", PmdSeverity::Minor),
    pmd("String and StringBuffer Rules", "Use Equals To Compare Strings", "PMD_UETCS", PmdSeverity::Critical),
    pmd("Type Resolution Rules", "Clone Method Must Implement Cloneable", "PMD_ClMMIC", PmdSeverity::Major),
    pmd("Type Resolution Rules", "Loose Coupling", "PMD_LoC", PmdSeverity::Major),
    pmd("Type Resolution Rules", "Signature Declare Throws Exception", "PMD_SiDTE", PmdSeverity::Major),
    pmd("Type Resolution Rules", "Unused Imports", "PMD_UnI", PmdSeverity::Minor),
    pmd("Unnecessary and Unused Code Rules", "Unused Local Variable", "PMD_ULV", PmdSeverity::Major),
    pmd("Unnecessary and Unused Code Rules", "Unused Private Field", "PMD_UPF", PmdSeverity::Major),
    pmd("Unnecessary and Unused Code Rules", "Unused Private Method", "PMD_UPM", PmdSeverity::Major),
];
