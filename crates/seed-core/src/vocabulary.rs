//! Dish-name vocabulary used for menu titles and order lines.

/// Dish names menu items and order lines are drawn from.
pub const DISH_NAMES: &[&str] = &[
    "Pizza Margarita",
    "Tacos al Pastor",
    "Hamburguesa Clásica",
    "Ensalada César",
    "Sushi de Salmón",
    "Spaghetti Bolognesa",
    "Pollo Teriyaki",
    "Arepas Rellenas",
    "Quesadillas de Queso",
    "Burrito de Carne",
    "Ceviche de Camarón",
    "Ramen de Cerdo",
    "Lasaña de Carne",
    "Hot Dog Americano",
    "Nachos con Queso",
    "Pad Thai",
    "Curry de Pollo",
    "Panqueques",
    "Croissant de Chocolate",
    "Brownie de Chocolate",
    "Helado de Vainilla",
    "Tarta de Manzana",
    "Café Latte",
    "Té Verde",
    "Jugo Natural",
    "Agua Mineral",
    "Refresco de Cola",
    "Limonada",
    "Smoothie de Mango",
    "Papas Fritas",
    "Alitas BBQ",
    "Sopa de Tomate",
    "Sándwich de Pavo",
    "Bagel con Queso Crema",
    "Tostadas Francesas",
    "Donas Glaseadas",
    "Empanadas de Pollo",
    "Tamales",
    "Churros",
    "Flan de Caramelo",
    "Pescado Frito",
    "Costillas BBQ",
    "Sopa de Mariscos",
    "Ensalada de Atún",
    "Waffles",
    "Milkshake de Fresa",
    "Cheesecake de Frutos Rojos",
    "Té Helado",
    "Pasta Alfredo",
    "Hamburguesa Vegetariana",
    "Tostadas de Ceviche",
    "Macarrones con Queso",
    "Fajitas de Pollo",
    "Caldo de Res",
    "Brochetas de Camarón",
    "Crepas de Nutella",
    "Huevos Rancheros",
    "Enchiladas Verdes",
    "Pozole Rojo",
    "Pulpo a la Gallega",
    "Tacos de Pescado",
    "Arroz Chaufa",
    "Pabellón Criollo",
    "Gyozas de Cerdo",
    "Croquetas de Jamón",
    "Camarones al Ajillo",
    "Bife de Chorizo",
    "Pastel de Tres Leches",
    "Pan de Bono",
    "Arequipe Casero",
    "Chilaquiles Rojos",
    "Yakisoba",
    "Empanadas de Queso",
    "Pastel de Chocolate",
    "Pollo Frito",
    "Arroz con Leche",
    "Tamal Oaxaqueño",
    "Canelones de Carne",
    "Bebida de Tamarindo",
    "Bebida de Jamaica",
    "Guacamole",
    "Torta Cubana",
    "Hamburguesa de Pollo",
    "Pasta Carbonara",
    "Sopa de Cebolla",
    "Sopa de Tortilla",
    "Batido de Banana",
    "Café Americano",
    "Frappe de Caramelo",
    "Té de Manzanilla",
    "Café Mocha",
    "Smoothie Verde",
    "Rollos Primavera",
    "Atún Sellado",
    "Brochetas Vegetarianas",
    "Camarones Empanizados",
    "Albondigas Caseras",
    "Choripán",
    "Tostadas de Pollo",
    "Pollo a la Brasa",
    "Milanesa de Pollo",
    "Tacos de Barbacoa",
    "Ropa Vieja",
    "Pernil Asado",
    "Mojos de Ajo",
    "Mousse de Limón",
    "Tortilla Española",
    "Tacos de Carnitas",
    "Bebida de Horchata",
    "Pollo al Curry",
    "Ensalada Caprese",
    "Pollo Asado con Papas",
    "Tartaletas de Frutas",
    "Salmon a la Parrilla",
    "Risotto de Setas",
    "Tarta de Limón",
    "Ceviche de Tilapia",
    "Fideos Chinos con Vegetales",
    "Filete Mignon",
    "Sushi de Atún",
    "Pasta Pesto",
    "Ensalada de Quinoa",
    "Kebabs de Pollo",
    "Tacos de Lengua",
    "Lomo Saltado",
    "Panecillos de Ajo",
    "Burritos Veganos",
    "Torta de Carne",
    "Torta de Jamón y Queso",
    "Pasta con Pesto de Albahaca",
    "Pasta con Salsa de Tomate",
    "Alitas Picantes",
    "Tacos de Cochinita Pibil",
    "Calamares a la Romana",
    "Pizza Vegetariana",
    "Paella Valenciana",
    "Tartar de Salmón",
    "Curry Vegetal",
    "Ensalada Griega",
    "Tostadas de Aguacate",
    "Moussaka",
    "Tostadas de Pollo con Guacamole",
    "Sopa de Albóndigas",
    "Tacos de Pollo a la Parrilla",
    "Canelones de Espinacas",
    "Pasta Carbonara con Panceta",
    "Pizza de Pepperoni",
    "Pollo a la Naranja",
    "Pescado a la Veracruzana",
    "Sushi de Pez Mantequilla",
    "Alitas a la Buffalo",
    "Papas Gajo",
    "Arroz Basmati con Pollo",
    "Brochetas de Res",
    "Sopa Pho",
];
