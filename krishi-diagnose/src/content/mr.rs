use super::*;

pub(super) static BUNDLE: ContentBundle = ContentBundle {
    language: Language::Mr,
    title: "पीक सल्ला आणि माती आरोग्य",
    subtitle: "माती आरोग्य एकीकरणासह AI-आधारित पीक विश्लेषण",
    upload_prompt: "तुमच्या पिकाचा फोटो घ्या किंवा प्रतिमा अपलोड करा",
    take_photo: "फोटो घ्या",
    upload_image: "प्रतिमा अपलोड करा",
    analyzing: "तुमच्या पिकाचे विश्लेषण करत आहे...",
    results: "निदान परिणाम",
    confidence: "विश्वास पातळी",
    recommendations: "शिफारसी",
    soil_health: "माती आरोग्य विश्लेषण",
    soil_health_card: "माती आरोग्य कार्ड",
    has_card: "माझ्याकडे माती आरोग्य कार्ड आहे",
    no_card: "माझ्याकडे माती आरोग्य कार्ड नाही",
    upload_card: "माती आरोग्य कार्ड अपलोड करा",
    enter_aadhaar: "आधार नंबर टाका",
    link_aadhaar: "आधारशी जोडा",
    soil_parameters: "माती पॅरामीटर",
    location_details: "स्थान तपशील",
    select_state: "राज्य निवडा",
    select_district: "जिल्हा निवडा",
    select_city: "शहर/गाव निवडा",
    manual_entry: "मॅन्युअल माती डेटा एंट्री",
    severity: SeverityLabels {
        low: "कमी धोका",
        medium: "मध्यम धोका",
        high: "उच्च धोका",
    },
    actions: ActionLabels {
        retake: "दुसरा फोटो घ्या",
        speak_results: "परिणाम ऐका",
        get_help: "तज्ञ मदत मिळवा",
        back: "परत",
    },
    sample_results: SampleResults {
        disease: "पानावरील डाग रोग",
        description: "पिकाच्या पानांवर बुरशीजन्य संसर्गाची सुरुवातीची चिन्हे आढळली",
        treatment: "दर ७-१० दिवसांनी तांब्याचे बुरशीनाशक फवारणी करा। योग्य निचरा सुनिश्चित करा आणि वरून पाणी देणे टाळा।",
        prevention: "हवेच्या प्रवाहासाठी योग्य अंतर ठेवा। संक्रमित वनस्पतींचे अवशेष नियमितपणे काढून टाका।",
    },
    soil_data: SoilLabels {
        ph: "pH पातळी",
        nitrogen: "नायट्रोजन (N)",
        phosphorus: "फॉस्फरस (P)",
        potassium: "पोटॅशियम (K)",
        organic_carbon: "सेंद्रिय कार्बन",
        sulfur: "सल्फर (S)",
        zinc: "झिंक (Zn)",
        boron: "बोरॉन (B)",
        iron: "लोह (Fe)",
        manganese: "मॅंगनीज (Mn)",
    },
    tips: PhotoTips {
        photo_tips: "फोटो टिप्स",
        tip1: "चांगल्या नैसर्गिक प्रकाशात फोटो घ्या",
        tip2: "प्रभावित भागांवर स्पष्टपणे लक्ष केंद्रित करा",
        tip3: "तुलनेसाठी निरोगी भाग समाविष्ट करा",
        tip4: "सावली आणि अस्पष्टता टाळा",
    },
    page: PageLabels {
        diagnose_tab: "पीक निदान",
        soil_prompt: "तुमच्याकडे माती आरोग्य कार्ड आहे का? आम्ही तुम्हाला मातीचे तपशीलवार पॅरामीटर दाखवू शकतो किंवा कार्ड मिळवण्यास मदत करू शकतो.",
        card_prompt: "सर्व पॅरामीटर पाहण्यासाठी तुमचे माती आरोग्य कार्ड अपलोड करा.",
        card_data_note: "अपलोड केलेल्या कार्ड किंवा मॅन्युअल एंट्रीमधील डेटा",
        view_reference: "या ठिकाणाचा माती डेटा पहा",
        submit_data: "डेटा सबमिट करा",
        cancel: "रद्द करा",
        enter_value: "मूल्य टाका",
        complete: "पूर्ण",
        analyzed_image: "विश्लेषित प्रतिमा",
        treatment: "उपचार",
        prevention: "प्रतिबंध",
    },
};
