use super::*;

pub(super) static BUNDLE: ContentBundle = ContentBundle {
    language: Language::En,
    title: "Crop Advisory & Soil Health",
    subtitle: "AI-Powered Crop Analysis with Soil Health Integration",
    upload_prompt: "Take a photo or upload an image of your crop",
    take_photo: "Take Photo",
    upload_image: "Upload Image",
    analyzing: "Analyzing your crop...",
    results: "Diagnosis Results",
    confidence: "Confidence Level",
    recommendations: "Recommendations",
    soil_health: "Soil Health Analysis",
    soil_health_card: "Soil Health Card",
    has_card: "I have Soil Health Card",
    no_card: "I don't have Soil Health Card",
    upload_card: "Upload Soil Health Card",
    enter_aadhaar: "Enter Aadhaar Number",
    link_aadhaar: "Link with Aadhaar",
    soil_parameters: "Soil Parameters",
    location_details: "Location Details",
    select_state: "Select State",
    select_district: "Select District",
    select_city: "Select City/Village",
    manual_entry: "Manual Soil Data Entry",
    severity: SeverityLabels {
        low: "Low Risk",
        medium: "Medium Risk",
        high: "High Risk",
    },
    actions: ActionLabels {
        retake: "Take Another Photo",
        speak_results: "Listen to Results",
        get_help: "Get Expert Help",
        back: "Back",
    },
    sample_results: SampleResults {
        disease: "Leaf Spot Disease",
        description: "Early signs of fungal infection detected on crop leaves",
        treatment: "Apply copper-based fungicide spray every 7-10 days. Ensure proper drainage and avoid overhead watering.",
        prevention: "Maintain proper plant spacing for air circulation. Remove infected plant debris regularly.",
    },
    soil_data: SoilLabels {
        ph: "pH Level",
        nitrogen: "Nitrogen (N)",
        phosphorus: "Phosphorus (P)",
        potassium: "Potassium (K)",
        organic_carbon: "Organic Carbon",
        sulfur: "Sulfur (S)",
        zinc: "Zinc (Zn)",
        boron: "Boron (B)",
        iron: "Iron (Fe)",
        manganese: "Manganese (Mn)",
    },
    tips: PhotoTips {
        photo_tips: "Photo Tips",
        tip1: "Take photos in good natural light",
        tip2: "Focus on affected areas clearly",
        tip3: "Include healthy parts for comparison",
        tip4: "Avoid shadows and blur",
    },
    page: PageLabels {
        diagnose_tab: "Crop Diagnosis",
        soil_prompt: "Do you have a Soil Health Card? We can show you detailed soil parameters or help you get one.",
        card_prompt: "Upload your Soil Health Card to view all parameters automatically.",
        card_data_note: "Data from uploaded card or manual entry",
        view_reference: "View Soil Data for this Location",
        submit_data: "Submit Data",
        cancel: "Cancel",
        enter_value: "Enter value",
        complete: "complete",
        analyzed_image: "Analyzed Image",
        treatment: "Treatment",
        prevention: "Prevention",
    },
};
