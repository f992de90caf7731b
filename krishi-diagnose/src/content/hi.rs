use super::*;

pub(super) static BUNDLE: ContentBundle = ContentBundle {
    language: Language::Hi,
    title: "फसल सलाह और मिट्टी स्वास्थ्य",
    subtitle: "मिट्टी स्वास्थ्य एकीकरण के साथ AI-संचालित फसल विश्लेषण",
    upload_prompt: "अपनी फसल का फोटो लें या छवि अपलोड करें",
    take_photo: "फोटो लें",
    upload_image: "छवि अपलोड करें",
    analyzing: "आपकी फसल का विश्लेषण कर रहे हैं...",
    results: "निदान परिणाम",
    confidence: "विश्वास स्तर",
    recommendations: "सिफारिशें",
    soil_health: "मिट्टी स्वास्थ्य विश्लेषण",
    soil_health_card: "मिट्टी स्वास्थ्य कार्ड",
    has_card: "मेरे पास मिट्टी स्वास्थ्य कार्ड है",
    no_card: "मेरे पास मिट्टी स्वास्थ्य कार्ड नहीं है",
    upload_card: "मिट्टी स्वास्थ्य कार्ड अपलोड करें",
    enter_aadhaar: "आधार नंबर दर्ज करें",
    link_aadhaar: "आधार से लिंक करें",
    soil_parameters: "मिट्टी के पैरामीटर",
    location_details: "स्थान विवरण",
    select_state: "राज्य चुनें",
    select_district: "जिला चुनें",
    select_city: "शहर/गांव चुनें",
    manual_entry: "मैन्युअल मिट्टी डेटा प्रविष्टि",
    severity: SeverityLabels {
        low: "कम जोखिम",
        medium: "मध्यम जोखिम",
        high: "उच्च जोखिम",
    },
    actions: ActionLabels {
        retake: "दूसरी फोटो लें",
        speak_results: "परिणाम सुनें",
        get_help: "विशेषज्ञ सहायता लें",
        back: "वापस",
    },
    sample_results: SampleResults {
        disease: "पत्ती धब्बा रोग",
        description: "फसल की पत्तियों पर फंगल संक्रमण के प्रारंभिक संकेत मिले",
        treatment: "हर 7-10 दिन में तांबा आधारित फंगीसाइड स्प्रे करें। उचित जल निकासी सुनिश्चित करें और ऊपर से पानी देने से बचें।",
        prevention: "हवा के संचलन के लिए उचित पौधों की दूरी बनाए रखें। संक्रमित पौधों के मलबे को नियमित रूप से हटाएं।",
    },
    soil_data: SoilLabels {
        ph: "pH स्तर",
        nitrogen: "नाइट्रोजन (N)",
        phosphorus: "फास्फोरस (P)",
        potassium: "पोटेशियम (K)",
        organic_carbon: "जैविक कार्बन",
        sulfur: "सल्फर (S)",
        zinc: "जिंक (Zn)",
        boron: "बोरॉन (B)",
        iron: "आयरन (Fe)",
        manganese: "मैंगनीज (Mn)",
    },
    tips: PhotoTips {
        photo_tips: "फोटो टिप्स",
        tip1: "अच्छी प्राकृतिक रोशनी में फोटो लें",
        tip2: "प्रभावित क्षेत्रों पर स्पष्ट रूप से ध्यान दें",
        tip3: "तुलना के लिए स्वस्थ भागों को शामिल करें",
        tip4: "छाया और धुंधलेपन से बचें",
    },
    page: PageLabels {
        diagnose_tab: "फसल निदान",
        soil_prompt: "क्या आपके पास मिट्टी स्वास्थ्य कार्ड है? हम आपको विस्तृत मिट्टी पैरामीटर दिखा सकते हैं या कार्ड बनवाने में मदद कर सकते हैं।",
        card_prompt: "सभी पैरामीटर देखने के लिए अपना मिट्टी स्वास्थ्य कार्ड अपलोड करें।",
        card_data_note: "अपलोड किए गए कार्ड या मैन्युअल प्रविष्टि से डेटा",
        view_reference: "इस स्थान का मिट्टी डेटा देखें",
        submit_data: "डेटा जमा करें",
        cancel: "रद्द करें",
        enter_value: "मान दर्ज करें",
        complete: "पूर्ण",
        analyzed_image: "विश्लेषित छवि",
        treatment: "उपचार",
        prevention: "रोकथाम",
    },
};
