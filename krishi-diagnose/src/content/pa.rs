use super::*;

pub(super) static BUNDLE: ContentBundle = ContentBundle {
    language: Language::Pa,
    title: "ਫਸਲ ਸਲਾਹ ਅਤੇ ਮਿੱਟੀ ਸਿਹਤ",
    subtitle: "ਮਿੱਟੀ ਸਿਹਤ ਏਕੀਕਰਣ ਨਾਲ AI-ਸੰਚਾਲਿਤ ਫਸਲ ਵਿਸ਼ਲੇਸ਼ਣ",
    upload_prompt: "ਆਪਣੀ ਫਸਲ ਦੀ ਫੋਟੋ ਲਓ ਜਾਂ ਤਸਵੀਰ ਅਪਲੋਡ ਕਰੋ",
    take_photo: "ਫੋਟੋ ਲਓ",
    upload_image: "ਤਸਵੀਰ ਅਪਲੋਡ ਕਰੋ",
    analyzing: "ਤੁਹਾਡੀ ਫਸਲ ਦਾ ਵਿਸ਼ਲੇਸ਼ਣ ਕਰ ਰਿਹਾ ਹੈ...",
    results: "ਨਿਦਾਨ ਨਤੀਜੇ",
    confidence: "ਭਰੋਸੇ ਦਾ ਪੱਧਰ",
    recommendations: "ਸਿਫਾਰਸ਼ਾਂ",
    soil_health: "ਮਿੱਟੀ ਸਿਹਤ ਵਿਸ਼ਲੇਸ਼ਣ",
    soil_health_card: "ਮਿੱਟੀ ਸਿਹਤ ਕਾਰਡ",
    has_card: "ਮੇਰੇ ਕੋਲ ਮਿੱਟੀ ਸਿਹਤ ਕਾਰਡ ਹੈ",
    no_card: "ਮੇਰੇ ਕੋਲ ਮਿੱਟੀ ਸਿਹਤ ਕਾਰਡ ਨਹੀਂ ਹੈ",
    upload_card: "ਮਿੱਟੀ ਸਿਹਤ ਕਾਰਡ ਅਪਲੋਡ ਕਰੋ",
    enter_aadhaar: "ਆਧਾਰ ਨੰਬਰ ਦਰਜ ਕਰੋ",
    link_aadhaar: "ਆਧਾਰ ਨਾਲ ਲਿੰਕ ਕਰੋ",
    soil_parameters: "ਮਿੱਟੀ ਪੈਰਾਮੀਟਰ",
    location_details: "ਸਥਾਨ ਵੇਰਵੇ",
    select_state: "ਰਾਜ ਚੁਣੋ",
    select_district: "ਜ਼ਿਲ੍ਹਾ ਚੁਣੋ",
    select_city: "ਸ਼ਹਿਰ/ਪਿੰਡ ਚੁਣੋ",
    manual_entry: "ਮੈਨੁਅਲ ਮਿੱਟੀ ਡੇਟਾ ਐਂਟਰੀ",
    severity: SeverityLabels {
        low: "ਘੱਟ ਖਤਰਾ",
        medium: "ਮੱਧਮ ਖਤਰਾ",
        high: "ਉੱਚ ਖਤਰਾ",
    },
    actions: ActionLabels {
        retake: "ਹੋਰ ਫੋਟੋ ਲਓ",
        speak_results: "ਨਤੀਜੇ ਸੁਣੋ",
        get_help: "ਮਾਹਿਰ ਮਦਦ ਲਓ",
        back: "ਵਾਪਸ",
    },
    sample_results: SampleResults {
        disease: "ਪੱਤੇ ਦਾ ਧੱਬਾ ਰੋਗ",
        description: "ਫਸਲ ਦੇ ਪੱਤਿਆਂ ਉੱਤੇ ਫੰਗਲ ਇਨਫੈਕਸ਼ਨ ਦੇ ਸ਼ੁਰੂਆਤੀ ਨਿਸ਼ਾਨ ਮਿਲੇ ਹਨ",
        treatment: "ਹਰ 7-10 ਦਿਨਾਂ ਵਿੱਚ ਤਾਂਬੇ ਆਧਾਰਿਤ ਫੰਗੀਸਾਈਡ ਸਪਰੇ ਕਰੋ। ਸਹੀ ਨਿਕਾਸ ਯਕੀਨੀ ਬਣਾਓ ਅਤੇ ਉੱਪਰੋਂ ਪਾਣੀ ਦੇਣ ਤੋਂ ਬਚੋ।",
        prevention: "ਹਵਾ ਦੇ ਪ੍ਰਵਾਹ ਲਈ ਸਹੀ ਦੂਰੀ ਰੱਖੋ। ਸੰਕਰਮਿਤ ਪੌਧਿਆਂ ਦੇ ਬਚੇ ਹੋਏ ਹਿੱਸੇ ਨਿਯਮਿਤ ਹਟਾਓ।",
    },
    soil_data: SoilLabels {
        ph: "pH ਪੱਧਰ",
        nitrogen: "ਨਾਈਟ੍ਰੋਜਨ (N)",
        phosphorus: "ਫਾਸਫੋਰਸ (P)",
        potassium: "ਪੋਟਾਸ਼ੀਅਮ (K)",
        organic_carbon: "ਜੈਵਿਕ ਕਾਰਬਨ",
        sulfur: "ਸਲਫਰ (S)",
        zinc: "ਜ਼ਿੰਕ (Zn)",
        boron: "ਬੋਰਾਨ (B)",
        iron: "ਆਇਰਨ (Fe)",
        manganese: "ਮੈਂਗਨੀਜ਼ (Mn)",
    },
    tips: PhotoTips {
        photo_tips: "ਫੋਟੋ ਸੁਝਾਅ",
        tip1: "ਚੰਗੀ ਕੁਦਰਤੀ ਰੋਸ਼ਨੀ ਵਿੱਚ ਫੋਟੋ ਲਓ",
        tip2: "ਪ੍ਰਭਾਵਿਤ ਖੇਤਰਾਂ ਉੱਤੇ ਸਪਸ਼ਟ ਧਿਆਨ ਦਿਓ",
        tip3: "ਤੁਲਨਾ ਲਈ ਸਿਹਤਮੰਦ ਹਿੱਸੇ ਸ਼ਾਮਲ ਕਰੋ",
        tip4: "ਪਰਛਾਵੇਂ ਅਤੇ ਧੁੰਦਲੇਪਨ ਤੋਂ ਬਚੋ",
    },
    page: PageLabels {
        diagnose_tab: "ਫਸਲ ਨਿਦਾਨ",
        soil_prompt: "ਕੀ ਤੁਹਾਡੇ ਕੋਲ ਮਿੱਟੀ ਸਿਹਤ ਕਾਰਡ ਹੈ? ਅਸੀਂ ਤੁਹਾਨੂੰ ਮਿੱਟੀ ਦੇ ਵਿਸਤ੍ਰਿਤ ਪੈਰਾਮੀਟਰ ਦਿਖਾ ਸਕਦੇ ਹਾਂ ਜਾਂ ਕਾਰਡ ਬਣਵਾਉਣ ਵਿੱਚ ਮਦਦ ਕਰ ਸਕਦੇ ਹਾਂ।",
        card_prompt: "ਸਾਰੇ ਪੈਰਾਮੀਟਰ ਦੇਖਣ ਲਈ ਆਪਣਾ ਮਿੱਟੀ ਸਿਹਤ ਕਾਰਡ ਅਪਲੋਡ ਕਰੋ।",
        card_data_note: "ਅਪਲੋਡ ਕੀਤੇ ਕਾਰਡ ਜਾਂ ਮੈਨੁਅਲ ਐਂਟਰੀ ਤੋਂ ਡੇਟਾ",
        view_reference: "ਇਸ ਸਥਾਨ ਦਾ ਮਿੱਟੀ ਡੇਟਾ ਵੇਖੋ",
        submit_data: "ਡੇਟਾ ਜਮ੍ਹਾਂ ਕਰੋ",
        cancel: "ਰੱਦ ਕਰੋ",
        enter_value: "ਮੁੱਲ ਦਰਜ ਕਰੋ",
        complete: "ਪੂਰਾ",
        analyzed_image: "ਵਿਸ਼ਲੇਸ਼ਿਤ ਤਸਵੀਰ",
        treatment: "ਇਲਾਜ",
        prevention: "ਰੋਕਥਾਮ",
    },
};
