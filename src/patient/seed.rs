use super::{Address, EmergencyContact, Gender, Patient, PatientStatus};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The fixed records every session starts with when no patients file is given.
pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date_of_birth: "1985-06-15".to_string(),
            gender: Gender::Male,
            address: Address {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
                country: "USA".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Jane Doe".to_string(),
                phone: "+1 (555) 987-6543".to_string(),
                relationship: "Spouse".to_string(),
            },
            medical_history: strings(&["Hypertension", "Diabetes Type 2"]),
            allergies: strings(&["Penicillin", "Shellfish"]),
            blood_type: "O+".to_string(),
            status: PatientStatus::Active,
            registration_date: "2023-01-15".to_string(),
            last_visit: Some("2024-07-20".to_string()),
        },
        Patient {
            id: "2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            date_of_birth: "1992-03-22".to_string(),
            gender: Gender::Female,
            address: Address {
                street: "456 Oak Ave".to_string(),
                city: "Los Angeles".to_string(),
                state: "CA".to_string(),
                zip_code: "90210".to_string(),
                country: "USA".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Michael Johnson".to_string(),
                phone: "+1 (555) 876-5432".to_string(),
                relationship: "Father".to_string(),
            },
            medical_history: strings(&["Asthma"]),
            allergies: strings(&["Latex"]),
            blood_type: "A-".to_string(),
            status: PatientStatus::Active,
            registration_date: "2023-03-10".to_string(),
            last_visit: Some("2024-07-25".to_string()),
        },
        Patient {
            id: "3".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Chen".to_string(),
            email: "michael.chen@email.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            date_of_birth: "1978-11-08".to_string(),
            gender: Gender::Male,
            address: Address {
                street: "789 Pine St".to_string(),
                city: "Chicago".to_string(),
                state: "IL".to_string(),
                zip_code: "60601".to_string(),
                country: "USA".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Lisa Chen".to_string(),
                phone: "+1 (555) 765-4321".to_string(),
                relationship: "Wife".to_string(),
            },
            medical_history: strings(&["High Cholesterol", "Arthritis"]),
            allergies: strings(&["Peanuts"]),
            blood_type: "B+".to_string(),
            status: PatientStatus::Pending,
            registration_date: "2024-07-01".to_string(),
            last_visit: None,
        },
        Patient {
            id: "4".to_string(),
            first_name: "Emily".to_string(),
            last_name: "Williams".to_string(),
            email: "emily.williams@email.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            date_of_birth: "1995-09-14".to_string(),
            gender: Gender::Female,
            address: Address {
                street: "321 Elm St".to_string(),
                city: "Miami".to_string(),
                state: "FL".to_string(),
                zip_code: "33101".to_string(),
                country: "USA".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Robert Williams".to_string(),
                phone: "+1 (555) 654-3210".to_string(),
                relationship: "Brother".to_string(),
            },
            medical_history: Vec::new(),
            allergies: Vec::new(),
            blood_type: "AB+".to_string(),
            status: PatientStatus::Inactive,
            registration_date: "2022-12-05".to_string(),
            last_visit: Some("2024-02-10".to_string()),
        },
    ]
}
