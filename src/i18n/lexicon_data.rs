//! Static lexicon tables.
//!
//! Tamil and Hindi carry the full legal vocabulary; the remaining Indian
//! languages carry a generic core vocabulary.

use crate::i18n::lexicon::{Lexicon, LexiconCoverage};
use crate::i18n::Language;

pub(crate) fn all_lexicons() -> Vec<Lexicon> {
    vec![
        Lexicon {
            language: Language::Tamil,
            coverage: LexiconCoverage::Full,
            header: "சட்ட ஆவண சுருக்கம்",
            intro: "இந்த சட்ட ஆவணத்தின் சுருக்கம் பின்வருமாறு:",
            footnote: "குறிப்பு: இது முழுமையான மொழிபெயர்ப்பு அல்ல, மேலும் முக்கிய சட்ட சொற்களுக்கான பொருள் மட்டுமே வழங்கப்படுகிறது.",
            section_headers: TAMIL_HEADERS,
            terms: TAMIL_TERMS,
        },
        Lexicon {
            language: Language::Hindi,
            coverage: LexiconCoverage::Full,
            header: "कानूनी दस्तावेज़ सारांश",
            intro: "इस कानूनी दस्तावेज़ का सारांश निम्नलिखित है:",
            footnote: "नोट: यह पूर्ण अनुवाद नहीं है, और केवल प्रमुख कानूनी शब्दों के अर्थ प्रदान करता है।",
            section_headers: HINDI_HEADERS,
            terms: HINDI_TERMS,
        },
        generic(
            Language::Bengali,
            "আইনি নথির সারসংক্ষেপ",
            "এই আইনি নথির সারসংক্ষেপ নিম্নরূপ:",
            "দ্রষ্টব্য: এটি একটি সম্পূর্ণ অনুবাদ নয়, মূল ইংরেজি পাঠ্যের সাথে প্রদান করা হয়েছে।",
            BENGALI_HEADERS,
            BENGALI_TERMS,
        ),
        generic(
            Language::Marathi,
            "कायदेशीर दस्तऐवजाचा सारांश",
            "या कायदेशीर दस्तऐवजाचा सारांश खालीलप्रमाणे आहे:",
            "टीप: हा पूर्ण अनुवाद नाही, मूळ इंग्रजी मजकुरासह प्रदान केला आहे.",
            MARATHI_HEADERS,
            MARATHI_TERMS,
        ),
        generic(
            Language::Telugu,
            "చట్టపరమైన పత్రం యొక్క సారాంశం",
            "ఈ చట్టపరమైన పత్రం యొక్క సారాంశం కింది విధంగా ఉంది:",
            "గమనిక: ఇది పూర్తి అనువాదం కాదు, అసలు ఇంగ్లీష్ పాఠంతో అందించబడింది.",
            TELUGU_HEADERS,
            TELUGU_TERMS,
        ),
        generic(
            Language::Gujarati,
            "કાનૂની દસ્તાવેજનો સારાંશ",
            "આ કાનૂની દસ્તાવેજનો સારાંશ નીચે મુજબ છે:",
            "નોંધ: આ પૂર્ણ અનુવાદ નથી, મૂળ અંગ્રેજી લખાણ સાથે પ્રદાન કરવામાં આવ્યું છે.",
            GUJARATI_HEADERS,
            GUJARATI_TERMS,
        ),
        generic(
            Language::Kannada,
            "ಕಾನೂನು ದಾಖಲೆಯ ಸಾರಾಂಶ",
            "ಈ ಕಾನೂನು ದಾಖಲೆಯ ಸಾರಾಂಶವು ಈ ಕೆಳಗಿನಂತಿದೆ:",
            "ಗಮನಿಸಿ: ಇದು ಪೂರ್ಣ ಅನುವಾದವಲ್ಲ, ಮೂಲ ಇಂಗ್ಲಿಷ್ ಪಠ್ಯದೊಂದಿಗೆ ಒದಗಿಸಲಾಗಿದೆ.",
            KANNADA_HEADERS,
            KANNADA_TERMS,
        ),
        generic(
            Language::Malayalam,
            "നിയമപരമായ രേഖയുടെ സംഗ്രഹം",
            "ഈ നിയമപരമായ രേഖയുടെ സംഗ്രഹം ചുവടെ കാണുന്നു:",
            "കുറിപ്പ്: ഇത് ഒരു പൂർണ്ണ വിവർത്തനമല്ല, യഥാർത്ഥ ഇംഗ്ലീഷ് ടെക്സ്റ്റിനൊപ്പം നൽകിയിരിക്കുന്നു.",
            MALAYALAM_HEADERS,
            MALAYALAM_TERMS,
        ),
        generic(
            Language::Punjabi,
            "ਕਾਨੂੰਨੀ ਦਸਤਾਵੇਜ਼ ਦਾ ਸਾਰ",
            "ਇਸ ਕਾਨੂੰਨੀ ਦਸਤਾਵੇਜ਼ ਦਾ ਸਾਰ ਹੇਠਾਂ ਦਿੱਤਾ ਗਿਆ ਹੈ:",
            "ਨੋਟ: ਇਹ ਪੂਰਾ ਅਨੁਵਾਦ ਨਹੀਂ ਹੈ, ਅਸਲ ਅੰਗਰੇਜ਼ੀ ਪਾਠ ਦੇ ਨਾਲ ਪ੍ਰਦਾਨ ਕੀਤਾ ਗਿਆ ਹੈ।",
            PUNJABI_HEADERS,
            PUNJABI_TERMS,
        ),
        generic(
            Language::Urdu,
            "قانونی دستاویز کا خلاصہ",
            "اس قانونی دستاویز کا خلاصہ درج ذیل ہے:",
            "نوٹ: یہ مکمل ترجمہ نہیں ہے، اصل انگریزی متن کے ساتھ فراہم کیا گیا ہے۔",
            URDU_HEADERS,
            URDU_TERMS,
        ),
        generic(
            Language::Odia,
            "ଆଇନଗତ ଦଲିଲର ସାରାଂଶ",
            "ଏହି ଆଇନଗତ ଦଲିଲର ସାରାଂଶ ନିମ୍ନରେ ଦିଆଯାଇଛି:",
            "ଦ୍ରଷ୍ଟବ୍ୟ: ଏହା ଏକ ସମ୍ପୂର୍ଣ୍ଣ ଅନୁବାଦ ନୁହେଁ, ମୂଳ ଇଂରାଜୀ ପାଠ୍ୟ ସହିତ ପ୍ରଦାନ କରାଯାଇଛି।",
            ODIA_HEADERS,
            ODIA_TERMS,
        ),
    ]
}

fn generic(
    language: Language,
    header: &'static str,
    intro: &'static str,
    footnote: &'static str,
    section_headers: &'static [(&'static str, &'static str)],
    terms: &'static [(&'static str, &'static str)],
) -> Lexicon {
    Lexicon {
        language,
        coverage: LexiconCoverage::Generic,
        header,
        intro,
        footnote,
        section_headers,
        terms,
    }
}

// ==================== Tamil ====================

const TAMIL_HEADERS: &[(&str, &str)] = &[
    ("Overview", "கண்ணோட்டம்"),
    ("Summary", "சுருக்கம்"),
    ("Introduction", "அறிமுகம்"),
    ("Background", "பின்னணி"),
    ("Purpose", "நோக்கம்"),
    ("Scope", "நோக்கம்"),
    ("Terms", "விதிமுறைகள்"),
    ("Conditions", "நிபந்தனைகள்"),
    ("Obligations", "கடமைகள்"),
    ("Rights", "உரிமைகள்"),
    ("Representations", "பிரதிநிதித்துவங்கள்"),
    ("Warranties", "உத்தரவாதங்கள்"),
    ("Payment", "கட்டணம்"),
    ("Termination", "முடிவுறுத்தல்"),
    ("Governing Law", "ஆளும் சட்டம்"),
    ("Dispute Resolution", "சர்ச்சை தீர்வு"),
    ("Confidentiality", "இரகசியத்தன்மை"),
    ("General Provisions", "பொது விதிகள்"),
    ("Miscellaneous", "இதர"),
    ("Signatures", "கையொப்பங்கள்"),
];

const TAMIL_TERMS: &[(&str, &str)] = &[
    // Basic contract terms
    ("agreement", "ஒப்பந்தம்"),
    ("contract", "ஒப்பந்தம்"),
    ("party", "கட்சி"),
    ("parties", "கட்சிகள்"),
    ("terms", "விதிமுறைகள்"),
    ("conditions", "நிபந்தனைகள்"),
    ("clause", "பிரிவு"),
    ("section", "பிரிவு"),
    ("paragraph", "பத்தி"),
    ("article", "கட்டுரை"),
    ("addendum", "இணைப்பு"),
    ("amendment", "திருத்தம்"),
    // Legal framework
    ("law", "சட்டம்"),
    ("legal", "சட்டபூர்வமான"),
    ("statute", "சட்டவிதி"),
    ("regulation", "விதிமுறை"),
    ("provision", "ஏற்பாடு"),
    ("code", "நெறிமுறை"),
    ("bylaws", "துணைச்சட்டங்கள்"),
    ("legislation", "சட்டமியற்றுதல்"),
    ("ordinance", "அரசாணை"),
    // Courts
    ("court", "நீதிமன்றம்"),
    ("supreme court", "உச்ச நீதிமன்றம்"),
    ("high court", "உயர் நீதிமன்றம்"),
    ("district court", "மாவட்ட நீதிமன்றம்"),
    ("judge", "நீதிபதி"),
    ("magistrate", "நீதித்துறை அதிகாரி"),
    ("bench", "நீதிபீடம்"),
    ("plaintiff", "வாதி"),
    ("defendant", "பிரதிவாதி"),
    ("petitioner", "மனுதாரர்"),
    ("respondent", "பதிலளிப்பவர்"),
    ("appellant", "மேல்முறையீட்டாளர்"),
    ("witness", "சாட்சி"),
    ("testimony", "சாட்சியம்"),
    ("evidence", "ஆதாரம்"),
    ("exhibit", "காட்சிப்பொருள்"),
    ("affidavit", "சத்தியக்கடதாசி"),
    ("deposition", "வாக்குமூலம்"),
    ("docket", "வழக்குப்பட்டியல்"),
    // Outcomes
    ("verdict", "தீர்ப்பு"),
    ("ruling", "தீர்ப்பு"),
    ("judgment", "தீர்ப்பு"),
    ("decree", "ஆணை"),
    ("order", "உத்தரவு"),
    ("injunction", "தடையாணை"),
    ("appeal", "மேல்முறையீடு"),
    ("stay", "இடைக்காலத் தடை"),
    ("dismissal", "நிராகரிப்பு"),
    // Professionals
    ("attorney", "வழக்கறிஞர்"),
    ("lawyer", "வழக்கறிஞர்"),
    ("advocate", "வழக்கறிஞர்"),
    ("counsel", "ஆலோசகர்"),
    ("solicitor", "வழக்கறிஞர்"),
    ("barrister", "வழக்காடும் வழக்கறிஞர்"),
    ("notary", "நோட்டரி"),
    ("client", "வாடிக்கையாளர்"),
    // Rights and obligations
    ("rights", "உரிமைகள்"),
    ("obligations", "கடமைகள்"),
    ("duties", "கடமைகள்"),
    ("liability", "பொறுப்பு"),
    ("indemnity", "இழப்பீட்டுப் பாதுகாப்பு"),
    ("warranty", "உத்தரவாதம்"),
    ("guarantee", "உறுதிமொழி"),
    ("covenant", "உடன்படிக்கை"),
    ("undertaking", "மேற்கொள்ளல்"),
    // Remedies and penalties
    ("damages", "இழப்பீடுகள்"),
    ("compensation", "இழப்பீடு"),
    ("restitution", "மீட்டளிப்பு"),
    ("specific performance", "குறிப்பிட்ட செயலாக்கம்"),
    ("breach", "மீறல்"),
    ("violation", "மீறல்"),
    ("penalty", "அபராதம்"),
    ("fine", "அபராதம்"),
    ("sanction", "தண்டனை"),
    ("punishment", "தண்டனை"),
    // Contract lifecycle
    ("execution", "செயல்படுத்துதல்"),
    ("enforcement", "அமலாக்கம்"),
    ("termination", "முடிவுறுத்தல்"),
    ("expiration", "காலாவதியாதல்"),
    ("renewal", "புதுப்பித்தல்"),
    ("extension", "நீட்டிப்பு"),
    ("cancellation", "ரத்து"),
    ("rescission", "விலக்கல்"),
    // Dispute resolution
    ("jurisdiction", "அதிகார வரம்பு"),
    ("venue", "நீதிமன்ற இடம்"),
    ("arbitration", "நடுவர் தீர்ப்பு"),
    ("mediation", "மத்தியஸ்தம்"),
    ("conciliation", "சமரசம்"),
    ("settlement", "தீர்வு"),
    ("negotiation", "பேச்சுவார்த்தை"),
    ("dispute", "சர்ச்சை"),
    ("litigation", "வழக்காடுதல்"),
    // Documents
    ("document", "ஆவணம்"),
    ("deed", "பத்திரம்"),
    ("certificate", "சான்றிதழ்"),
    ("signature", "கையொப்பம்"),
    ("seal", "முத்திரை"),
    ("date", "தேதி"),
    ("execution date", "செயல்படுத்தும் தேதி"),
    ("effective date", "நடைமுறைக்கு வரும் தேதி"),
    // Property
    ("property", "சொத்து"),
    ("real property", "அசையா சொத்து"),
    ("personal property", "அசையும் சொத்து"),
    ("asset", "சொத்து"),
    ("title", "உரிமை"),
    ("mortgage", "அடமானம்"),
    ("lease", "குத்தகை"),
    ("easement", "உரிமைப்பாதை"),
    // Privacy and confidentiality
    ("confidential", "இரகசியமான"),
    ("confidentiality", "இரகசியத்தன்மை"),
    ("privacy", "தனியுரிமை"),
    ("disclosure", "வெளிப்படுத்துதல்"),
    ("non-disclosure", "வெளியிடாமை"),
    // Financial
    ("payment", "கட்டணம்"),
    ("fee", "கட்டணம்"),
    ("cost", "செலவு"),
    ("expense", "செலவு"),
    ("price", "விலை"),
    ("consideration", "பரிசீலனை"),
    ("tax", "வரி"),
    ("interest", "வட்டி"),
    ("default", "தவறுகை"),
    // Drafting
    ("hereby", "இதன்மூலம்"),
    ("whereas", "அதேபோல்"),
    ("notwithstanding", "எனினும்"),
    ("herein", "இதில்"),
    ("hereof", "இதைப் பற்றி"),
    ("thereof", "அதைப் பற்றி"),
    ("aforementioned", "மேலே குறிப்பிடப்பட்ட"),
    ("hereunder", "இதன் கீழ்"),
    ("subject to", "இதற்கு உட்பட்டு"),
    // General concepts
    ("force majeure", "இயற்கை சீற்றம்"),
    ("act of god", "இயற்கை சீற்றம்"),
    ("good faith", "நல்லெண்ணம்"),
    ("due diligence", "உரிய கவனம்"),
    ("precedent", "முன்னுதாரணம்"),
    ("doctrine", "கோட்பாடு"),
    ("rule of law", "சட்டத்தின் ஆட்சி"),
    ("public policy", "பொது கொள்கை"),
    ("summary", "சுருக்கம்"),
];

// ==================== Hindi ====================

const HINDI_HEADERS: &[(&str, &str)] = &[
    ("Overview", "अवलोकन"),
    ("Summary", "सारांश"),
    ("Introduction", "परिचय"),
    ("Background", "पृष्ठभूमि"),
    ("Purpose", "उद्देश्य"),
    ("Scope", "विस्तार"),
    ("Terms", "शर्तें"),
    ("Conditions", "शर्तें"),
    ("Obligations", "दायित्व"),
    ("Rights", "अधिकार"),
    ("Representations", "प्रतिनिधित्व"),
    ("Warranties", "वारंटियां"),
    ("Payment", "भुगतान"),
    ("Termination", "समाप्ति"),
    ("Governing Law", "शासी कानून"),
    ("Dispute Resolution", "विवाद समाधान"),
    ("Confidentiality", "गोपनीयता"),
    ("General Provisions", "सामान्य प्रावधान"),
    ("Miscellaneous", "विविध"),
    ("Signatures", "हस्ताक्षर"),
];

const HINDI_TERMS: &[(&str, &str)] = &[
    // Basic contract terms
    ("agreement", "समझौता"),
    ("contract", "अनुबंध"),
    ("party", "पक्ष"),
    ("parties", "पक्षों"),
    ("terms", "शर्तें"),
    ("conditions", "शर्तें"),
    ("clause", "खंड"),
    ("section", "अनुभाग"),
    ("paragraph", "पैराग्राफ"),
    ("article", "अनुच्छेद"),
    ("addendum", "परिशिष्ट"),
    ("amendment", "संशोधन"),
    // Legal framework
    ("law", "कानून"),
    ("legal", "कानूनी"),
    ("statute", "विधि"),
    ("regulation", "नियम"),
    ("provision", "प्रावधान"),
    ("code", "संहिता"),
    ("bylaws", "उपनियम"),
    ("legislation", "विधान"),
    ("ordinance", "अध्यादेश"),
    // Courts
    ("court", "न्यायालय"),
    ("supreme court", "सर्वोच्च न्यायालय"),
    ("high court", "उच्च न्यायालय"),
    ("district court", "जिला न्यायालय"),
    ("judge", "न्यायाधीश"),
    ("magistrate", "मजिस्ट्रेट"),
    ("bench", "पीठ"),
    ("plaintiff", "वादी"),
    ("defendant", "प्रतिवादी"),
    ("petitioner", "याचिकाकर्ता"),
    ("respondent", "प्रत्यर्थी"),
    ("appellant", "अपीलकर्ता"),
    ("witness", "गवाह"),
    ("testimony", "गवाही"),
    ("evidence", "सबूत"),
    ("exhibit", "प्रदर्शनी"),
    ("affidavit", "हलफनामा"),
    ("deposition", "बयान"),
    ("docket", "डॉकेट"),
    // Outcomes
    ("verdict", "फैसला"),
    ("ruling", "निर्णय"),
    ("judgment", "न्यायनिर्णय"),
    ("decree", "डिक्री"),
    ("order", "आदेश"),
    ("injunction", "निषेधाज्ञा"),
    ("appeal", "अपील"),
    ("stay", "रोक"),
    ("dismissal", "खारिज"),
    // Professionals
    ("attorney", "अधिवक्ता"),
    ("lawyer", "वकील"),
    ("advocate", "अधिवक्ता"),
    ("counsel", "परामर्शदाता"),
    ("solicitor", "सॉलिसिटर"),
    ("barrister", "बैरिस्टर"),
    ("notary", "नोटरी"),
    ("client", "ग्राहक"),
    // Rights and obligations
    ("rights", "अधिकार"),
    ("obligations", "दायित्व"),
    ("duties", "कर्तव्य"),
    ("liability", "देयता"),
    ("indemnity", "क्षतिपूर्ति"),
    ("warranty", "वारंटी"),
    ("guarantee", "गारंटी"),
    ("covenant", "प्रतिज्ञापत्र"),
    ("undertaking", "वचनबद्धता"),
    // Remedies and penalties
    ("damages", "हर्जाना"),
    ("compensation", "मुआवजा"),
    ("restitution", "प्रत्यावर्तन"),
    ("specific performance", "विशिष्ट पालन"),
    ("breach", "उल्लंघन"),
    ("violation", "उल्लंघन"),
    ("penalty", "जुर्माना"),
    ("fine", "जुर्माना"),
    ("sanction", "प्रतिबंध"),
    ("punishment", "सजा"),
    // Contract lifecycle
    ("execution", "निष्पादन"),
    ("enforcement", "प्रवर्तन"),
    ("termination", "समाप्ति"),
    ("expiration", "अवसान"),
    ("renewal", "नवीकरण"),
    ("extension", "विस्तार"),
    ("cancellation", "रद्दीकरण"),
    ("rescission", "विखंडन"),
    // Dispute resolution
    ("jurisdiction", "क्षेत्राधिकार"),
    ("venue", "स्थान"),
    ("arbitration", "मध्यस्थता"),
    ("mediation", "मध्यस्थता"),
    ("conciliation", "सुलह"),
    ("settlement", "निपटारा"),
    ("negotiation", "बातचीत"),
    ("dispute", "विवाद"),
    ("litigation", "मुकदमेबाजी"),
    // Documents
    ("document", "दस्तावेज़"),
    ("deed", "विलेख"),
    ("certificate", "प्रमाणपत्र"),
    ("signature", "हस्ताक्षर"),
    ("seal", "मुहर"),
    ("date", "तारीख"),
    ("execution date", "निष्पादन तिथि"),
    ("effective date", "प्रभावी तिथि"),
    // Property
    ("property", "संपत्ति"),
    ("real property", "अचल संपत्ति"),
    ("personal property", "व्यक्तिगत संपत्ति"),
    ("asset", "परिसंपत्ति"),
    ("title", "स्वामित्व"),
    ("mortgage", "बंधक"),
    ("lease", "पट्टा"),
    ("easement", "सुखाधिकार"),
    // Privacy and confidentiality
    ("confidential", "गोपनीय"),
    ("confidentiality", "गोपनीयता"),
    ("privacy", "निजता"),
    ("disclosure", "प्रकटीकरण"),
    ("non-disclosure", "गैर-प्रकटीकरण"),
    // Financial
    ("payment", "भुगतान"),
    ("fee", "शुल्क"),
    ("cost", "लागत"),
    ("expense", "व्यय"),
    ("price", "मूल्य"),
    ("consideration", "प्रतिफल"),
    ("tax", "कर"),
    ("interest", "ब्याज"),
    ("default", "चूक"),
    // Drafting
    ("hereby", "एतद्द्वारा"),
    ("whereas", "जबकि"),
    ("notwithstanding", "के बावजूद"),
    ("herein", "इसमें"),
    ("hereof", "इसका"),
    ("thereof", "उसका"),
    ("aforementioned", "पूर्वोक्त"),
    ("hereunder", "इसके अंतर्गत"),
    ("subject to", "के अधीन"),
    // General concepts
    ("force majeure", "अप्रत्याशित घटना"),
    ("act of god", "दैवीय घटना"),
    ("good faith", "सद्भावना"),
    ("due diligence", "सम्यक तत्परता"),
    ("precedent", "पूर्वोदाहरण"),
    ("doctrine", "सिद्धांत"),
    ("rule of law", "विधि का शासन"),
    ("public policy", "लोक नीति"),
    ("summary", "सारांश"),
];

// ==================== Generic lexicons ====================

const BENGALI_HEADERS: &[(&str, &str)] = &[
    ("Overview", "সংক্ষিপ্ত বিবরণ"),
    ("Summary", "সারসংক্ষেপ"),
    ("Termination", "সমাপ্তি"),
    ("Payment", "অর্থপ্রদান"),
    ("Confidentiality", "গোপনীয়তা"),
];

const BENGALI_TERMS: &[(&str, &str)] = &[
    ("agreement", "চুক্তি"),
    ("contract", "চুক্তিপত্র"),
    ("party", "পক্ষ"),
    ("parties", "পক্ষসমূহ"),
    ("court", "আদালত"),
    ("law", "আইন"),
    ("liability", "দায়"),
    ("payment", "অর্থপ্রদান"),
    ("termination", "সমাপ্তি"),
    ("confidentiality", "গোপনীয়তা"),
    ("dispute", "বিরোধ"),
    ("penalty", "জরিমানা"),
    ("warranty", "ওয়ারেন্টি"),
    ("arbitration", "সালিশ"),
    ("rights", "অধিকার"),
    ("obligations", "দায়বদ্ধতা"),
    ("summary", "সারসংক্ষেপ"),
];

const MARATHI_HEADERS: &[(&str, &str)] = &[
    ("Overview", "आढावा"),
    ("Summary", "सारांश"),
    ("Termination", "समाप्ती"),
    ("Payment", "देयक"),
    ("Confidentiality", "गोपनीयता"),
];

const MARATHI_TERMS: &[(&str, &str)] = &[
    ("agreement", "करार"),
    ("contract", "करारनामा"),
    ("party", "पक्ष"),
    ("parties", "पक्षकार"),
    ("court", "न्यायालय"),
    ("law", "कायदा"),
    ("liability", "दायित्व"),
    ("payment", "देयक"),
    ("termination", "समाप्ती"),
    ("confidentiality", "गोपनीयता"),
    ("dispute", "वाद"),
    ("penalty", "दंड"),
    ("warranty", "हमी"),
    ("arbitration", "लवाद"),
    ("rights", "हक्क"),
    ("obligations", "जबाबदाऱ्या"),
    ("summary", "सारांश"),
];

const TELUGU_HEADERS: &[(&str, &str)] = &[
    ("Overview", "అవలోకనం"),
    ("Summary", "సారాంశం"),
    ("Termination", "రద్దు"),
    ("Payment", "చెల్లింపు"),
    ("Confidentiality", "గోప్యత"),
];

const TELUGU_TERMS: &[(&str, &str)] = &[
    ("agreement", "ఒప్పందం"),
    ("contract", "కాంట్రాక్టు"),
    ("party", "పక్షం"),
    ("parties", "పక్షాలు"),
    ("court", "న్యాయస్థానం"),
    ("law", "చట్టం"),
    ("liability", "బాధ్యత"),
    ("payment", "చెల్లింపు"),
    ("termination", "రద్దు"),
    ("confidentiality", "గోప్యత"),
    ("dispute", "వివాదం"),
    ("penalty", "జరిమానా"),
    ("warranty", "వారంటీ"),
    ("arbitration", "మధ్యవర్తిత్వం"),
    ("rights", "హక్కులు"),
    ("obligations", "బాధ్యతలు"),
    ("summary", "సారాంశం"),
];

const GUJARATI_HEADERS: &[(&str, &str)] = &[
    ("Overview", "ઝાંખી"),
    ("Summary", "સારાંશ"),
    ("Termination", "સમાપ્તિ"),
    ("Payment", "ચુકવણી"),
    ("Confidentiality", "ગોપનીયતા"),
];

const GUJARATI_TERMS: &[(&str, &str)] = &[
    ("agreement", "કરાર"),
    ("contract", "કોન્ટ્રાક્ટ"),
    ("party", "પક્ષ"),
    ("parties", "પક્ષકારો"),
    ("court", "અદાલત"),
    ("law", "કાયદો"),
    ("liability", "જવાબદારી"),
    ("payment", "ચુકવણી"),
    ("termination", "સમાપ્તિ"),
    ("confidentiality", "ગોપનીયતા"),
    ("dispute", "વિવાદ"),
    ("penalty", "દંડ"),
    ("warranty", "વોરંટી"),
    ("arbitration", "લવાદ"),
    ("rights", "અધિકારો"),
    ("obligations", "જવાબદારીઓ"),
    ("summary", "સારાંશ"),
];

const KANNADA_HEADERS: &[(&str, &str)] = &[
    ("Overview", "ಅವಲೋಕನ"),
    ("Summary", "ಸಾರಾಂಶ"),
    ("Termination", "ಮುಕ್ತಾಯ"),
    ("Payment", "ಪಾವತಿ"),
    ("Confidentiality", "ಗೌಪ್ಯತೆ"),
];

const KANNADA_TERMS: &[(&str, &str)] = &[
    ("agreement", "ಒಪ್ಪಂದ"),
    ("contract", "ಗುತ್ತಿಗೆ"),
    ("party", "ಪಕ್ಷ"),
    ("parties", "ಪಕ್ಷಗಳು"),
    ("court", "ನ್ಯಾಯಾಲಯ"),
    ("law", "ಕಾನೂನು"),
    ("liability", "ಹೊಣೆಗಾರಿಕೆ"),
    ("payment", "ಪಾವತಿ"),
    ("termination", "ಮುಕ್ತಾಯ"),
    ("confidentiality", "ಗೌಪ್ಯತೆ"),
    ("dispute", "ವಿವಾದ"),
    ("penalty", "ದಂಡ"),
    ("warranty", "ಖಾತರಿ"),
    ("arbitration", "ಮಧ್ಯಸ್ಥಿಕೆ"),
    ("rights", "ಹಕ್ಕುಗಳು"),
    ("obligations", "ಕರ್ತವ್ಯಗಳು"),
    ("summary", "ಸಾರಾಂಶ"),
];

const MALAYALAM_HEADERS: &[(&str, &str)] = &[
    ("Overview", "അവലോകനം"),
    ("Summary", "സംഗ്രഹം"),
    ("Termination", "അവസാനിപ്പിക്കൽ"),
    ("Payment", "പണമടയ്ക്കൽ"),
    ("Confidentiality", "രഹസ്യസ്വഭാവം"),
];

const MALAYALAM_TERMS: &[(&str, &str)] = &[
    ("agreement", "കരാർ"),
    ("contract", "ഉടമ്പടി"),
    ("party", "കക്ഷി"),
    ("parties", "കക്ഷികൾ"),
    ("court", "കോടതി"),
    ("law", "നിയമം"),
    ("liability", "ബാധ്യത"),
    ("payment", "പണമടയ്ക്കൽ"),
    ("termination", "അവസാനിപ്പിക്കൽ"),
    ("confidentiality", "രഹസ്യസ്വഭാവം"),
    ("dispute", "തർക്കം"),
    ("penalty", "പിഴ"),
    ("warranty", "വാറന്റി"),
    ("arbitration", "മദ്ധ്യസ്ഥത"),
    ("rights", "അവകാശങ്ങൾ"),
    ("obligations", "ബാധ്യതകൾ"),
    ("summary", "സംഗ്രഹം"),
];

const PUNJABI_HEADERS: &[(&str, &str)] = &[
    ("Overview", "ਸੰਖੇਪ ਜਾਣਕਾਰੀ"),
    ("Summary", "ਸਾਰ"),
    ("Termination", "ਸਮਾਪਤੀ"),
    ("Payment", "ਭੁਗਤਾਨ"),
    ("Confidentiality", "ਗੁਪਤਤਾ"),
];

const PUNJABI_TERMS: &[(&str, &str)] = &[
    ("agreement", "ਸਮਝੌਤਾ"),
    ("contract", "ਇਕਰਾਰਨਾਮਾ"),
    ("party", "ਧਿਰ"),
    ("parties", "ਧਿਰਾਂ"),
    ("court", "ਅਦਾਲਤ"),
    ("law", "ਕਾਨੂੰਨ"),
    ("liability", "ਦੇਣਦਾਰੀ"),
    ("payment", "ਭੁਗਤਾਨ"),
    ("termination", "ਸਮਾਪਤੀ"),
    ("confidentiality", "ਗੁਪਤਤਾ"),
    ("dispute", "ਵਿਵਾਦ"),
    ("penalty", "ਜੁਰਮਾਨਾ"),
    ("warranty", "ਵਾਰੰਟੀ"),
    ("arbitration", "ਸਾਲਸੀ"),
    ("rights", "ਅਧਿਕਾਰ"),
    ("obligations", "ਜ਼ਿੰਮੇਵਾਰੀਆਂ"),
    ("summary", "ਸਾਰ"),
];

const URDU_HEADERS: &[(&str, &str)] = &[
    ("Overview", "جائزہ"),
    ("Summary", "خلاصہ"),
    ("Termination", "اختتام"),
    ("Payment", "ادائیگی"),
    ("Confidentiality", "رازداری"),
];

const URDU_TERMS: &[(&str, &str)] = &[
    ("agreement", "معاہدہ"),
    ("contract", "ٹھیکہ"),
    ("party", "فریق"),
    ("parties", "فریقین"),
    ("court", "عدالت"),
    ("law", "قانون"),
    ("liability", "ذمہ داری"),
    ("payment", "ادائیگی"),
    ("termination", "اختتام"),
    ("confidentiality", "رازداری"),
    ("dispute", "تنازعہ"),
    ("penalty", "جرمانہ"),
    ("warranty", "وارنٹی"),
    ("arbitration", "ثالثی"),
    ("rights", "حقوق"),
    ("obligations", "ذمہ داریاں"),
    ("summary", "خلاصہ"),
];

const ODIA_HEADERS: &[(&str, &str)] = &[
    ("Overview", "ସମୀକ୍ଷା"),
    ("Summary", "ସାରାଂଶ"),
    ("Termination", "ସମାପ୍ତି"),
    ("Payment", "ଦେୟ"),
    ("Confidentiality", "ଗୋପନୀୟତା"),
];

const ODIA_TERMS: &[(&str, &str)] = &[
    ("agreement", "ଚୁକ୍ତି"),
    ("contract", "ଚୁକ୍ତିନାମା"),
    ("party", "ପକ୍ଷ"),
    ("parties", "ପକ୍ଷଗଣ"),
    ("court", "ଅଦାଲତ"),
    ("law", "ଆଇନ"),
    ("liability", "ଦାୟିତ୍ୱ"),
    ("payment", "ଦେୟ"),
    ("termination", "ସମାପ୍ତି"),
    ("confidentiality", "ଗୋପନୀୟତା"),
    ("dispute", "ବିବାଦ"),
    ("penalty", "ଜରିମାନା"),
    ("warranty", "ୱାରେଣ୍ଟି"),
    ("arbitration", "ମଧ୍ୟସ୍ଥତା"),
    ("rights", "ଅଧିକାର"),
    ("obligations", "ଦାୟିତ୍ୱଗୁଡ଼ିକ"),
    ("summary", "ସାରାଂଶ"),
];
